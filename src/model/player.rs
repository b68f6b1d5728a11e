use serde::{Deserialize, Serialize};

/// Opaque player identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Made/miss counters for one shot slot.
///
/// `attempted` stores *additional misses only*; the total number of attempts
/// is always `made + attempted`. This mirrors how the stat buttons feed the
/// counters (a made shot and a missed shot increment different fields) and
/// must not be "corrected" to store true attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotCounter {
    pub made: u32,
    pub attempted: u32,
}

impl ShotCounter {
    /// Total attempts: makes plus stored misses.
    pub fn total_attempts(&self) -> u32 {
        self.made + self.attempted
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotChart {
    pub three: ShotCounter,
    pub mid: ShotCounter,
    pub layup: ShotCounter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebounds {
    pub offensive: u32,
    pub defensive: u32,
}

/// One player's raw in-game counters. Created with everything at zero,
/// mutated only by stat events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub shots: ShotChart,
    pub rebounds: Rebounds,
    pub assists: u32,
    pub steals: u32,
    pub turnovers: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            shots: ShotChart::default(),
            rebounds: Rebounds::default(),
            assists: 0,
            steals: 0,
            turnovers: 0,
        }
    }
}
