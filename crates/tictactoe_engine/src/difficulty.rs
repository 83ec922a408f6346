//! Opponent difficulty levels.

use serde::{Deserialize, Serialize};

/// How hard the computer plays. Fixed for the length of a round.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Blocks an immediate human win, otherwise random.
    Medium,
    /// Full minimax search; never loses.
    Hard,
}
