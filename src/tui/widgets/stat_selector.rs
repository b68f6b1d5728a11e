//! Stat-input selector hint line.
//!
//! When a selector is open for a player, the team panel shows a key-hint
//! line under that player's row. The hints depend on the selected category.

use crate::tui::state::StatCategory;

/// Key hints for the open selector's category.
pub fn selector_hint(category: StatCategory) -> &'static str {
    match category {
        StatCategory::Points => "PTS: [l]ayup [m]id [t]hree, shift for a miss, esc cancel",
        StatCategory::Rebounds => "REB: [o]ffensive [d]efensive, esc cancel",
        StatCategory::Assists => "AST: enter +1, esc cancel",
        StatCategory::Steals => "STL: enter +1, esc cancel",
        StatCategory::Turnovers => "TO: enter +1, esc cancel",
    }
}
