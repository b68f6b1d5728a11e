use serde::{Deserialize, Serialize};

/// Point-value mapping applied to made shots.
///
/// Pickup games are commonly scored as 1s-and-2s (inside shots worth 1,
/// shots behind the arc worth 2) or 2s-and-3s (regulation values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringSystem {
    #[serde(rename = "1s_2s")]
    OnesAndTwos,
    #[serde(rename = "2s_3s")]
    TwosAndThrees,
}

impl Default for ScoringSystem {
    fn default() -> Self {
        ScoringSystem::TwosAndThrees
    }
}

impl ScoringSystem {
    /// Value of a made shot from behind the arc.
    pub fn three_value(&self) -> u32 {
        match self {
            ScoringSystem::OnesAndTwos => 2,
            ScoringSystem::TwosAndThrees => 3,
        }
    }

    /// Value of a made mid-range shot or layup.
    pub fn two_value(&self) -> u32 {
        match self {
            ScoringSystem::OnesAndTwos => 1,
            ScoringSystem::TwosAndThrees => 2,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ScoringSystem::OnesAndTwos => ScoringSystem::TwosAndThrees,
            ScoringSystem::TwosAndThrees => ScoringSystem::OnesAndTwos,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoringSystem::OnesAndTwos => "1s & 2s",
            ScoringSystem::TwosAndThrees => "2s & 3s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(ScoringSystem::OnesAndTwos.three_value(), 2);
        assert_eq!(ScoringSystem::OnesAndTwos.two_value(), 1);
        assert_eq!(ScoringSystem::TwosAndThrees.three_value(), 3);
        assert_eq!(ScoringSystem::TwosAndThrees.two_value(), 2);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(
            ScoringSystem::OnesAndTwos.toggled(),
            ScoringSystem::TwosAndThrees
        );
        assert_eq!(
            ScoringSystem::TwosAndThrees.toggled(),
            ScoringSystem::OnesAndTwos
        );
    }

    #[test]
    fn test_default_is_twos_and_threes() {
        assert_eq!(ScoringSystem::default(), ScoringSystem::TwosAndThrees);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScoringSystem::OnesAndTwos).unwrap(),
            "\"1s_2s\""
        );
        assert_eq!(
            serde_json::to_string(&ScoringSystem::TwosAndThrees).unwrap(),
            "\"2s_3s\""
        );
        let parsed: ScoringSystem = serde_json::from_str("\"1s_2s\"").unwrap();
        assert_eq!(parsed, ScoringSystem::OnesAndTwos);
    }
}
