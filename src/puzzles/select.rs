//! Puzzle selection
//!
//! Daily selection cycles through the list one puzzle per calendar day,
//! starting from a fixed epoch.

use super::Puzzle;
use chrono::{Local, NaiveDate};
use rand::prelude::IndexedRandom;

/// First day of the daily rotation
const EPOCH: (i32, u32, u32) = (2022, 1, 1);

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Pick the puzzle for a calendar day
///
/// Dates before the epoch wrap around. Returns `None` for an empty list.
#[must_use]
pub fn daily(puzzles: &[Puzzle], date: NaiveDate) -> Option<&Puzzle> {
    let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2)?;
    let len = i64::try_from(puzzles.len()).ok().filter(|&n| n > 0)?;
    let days = date.signed_duration_since(epoch).num_days();
    let index = usize::try_from(days.rem_euclid(len)).ok()?;
    puzzles.get(index)
}

/// Pick a puzzle at random
#[must_use]
pub fn random(puzzles: &[Puzzle]) -> Option<&Puzzle> {
    puzzles.choose(&mut rand::rng())
}
