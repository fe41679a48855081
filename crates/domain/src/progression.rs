//! Level and XP progression

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_LEVEL: u8 = 20;

const THRESHOLDS: [u32; MAX_LEVEL as usize] = [
    0, 300, 900, 2_700, 6_500, 14_000, 23_000, 34_000, 48_000, 64_000, 85_000, 100_000, 120_000,
    140_000, 165_000, 195_000, 225_000, 265_000, 305_000, 355_000,
];

/// Cumulative XP required to reach each level. Serialized as `{"1": 0, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XpTable(BTreeMap<u8, u32>);

impl XpTable {
    pub fn new(thresholds: BTreeMap<u8, u32>) -> Self {
        Self(thresholds)
    }

    /// XP threshold of `level`, if the table has one.
    pub fn threshold(&self, level: u8) -> Option<u32> {
        self.0.get(&level).copied()
    }

    pub fn max_level(&self) -> u8 {
        self.0.keys().next_back().copied().unwrap_or(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().map(|(l, xp)| (*l, *xp))
    }

    /// Highest level whose threshold is at most `xp`, never below 1.
    pub fn level_for_xp(&self, xp: u32) -> u8 {
        self.0
            .iter()
            .filter(|(_, threshold)| **threshold <= xp)
            .map(|(level, _)| *level)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Threshold of the next level, or of the last level once there.
    pub fn xp_for_next_level(&self, level: u8) -> u32 {
        let next = level.saturating_add(1).min(self.max_level());
        self.threshold(next).unwrap_or(0)
    }
}

impl Default for XpTable {
    fn default() -> Self {
        Self(
            THRESHOLDS
                .iter()
                .enumerate()
                .map(|(i, xp)| (i as u8 + 1, *xp))
                .collect(),
        )
    }
}

/// Proficiency bonus for a level.
pub fn proficiency_bonus(level: u8) -> i32 {
    match level {
        0..=4 => 3,
        5..=8 => 4,
        9..=11 => 5,
        12..=16 => 6,
        17..=20 => 7,
        _ => 8,
    }
}

/// Level reached with `xp` on the standard table.
pub fn level_for_xp(xp: u32) -> u8 {
    XpTable::default().level_for_xp(xp)
}

/// Next-level threshold on the standard table.
pub fn xp_for_next_level(level: u8) -> u32 {
    XpTable::default().xp_for_next_level(level)
}

/// Progress bar data for the sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpProgress {
    pub next_level_xp: u32,
    /// Not clamped: below 0 when xp is under the level's threshold, above
    /// 100 once it passes the next one.
    pub percent_complete: f64,
}

/// Progress from the current level's threshold toward the next one.
///
/// At the last level the span is zero and progress reads as complete.
pub fn xp_progress(level: u8, xp: u32, table: &XpTable) -> XpProgress {
    let current = table.threshold(level).unwrap_or(0);
    let next = table.xp_for_next_level(level);
    let span = f64::from(next) - f64::from(current);
    let percent_complete = if span <= 0.0 {
        100.0
    } else {
        (f64::from(xp) - f64::from(current)) / span * 100.0
    };
    XpProgress {
        next_level_xp: next,
        percent_complete,
    }
}
