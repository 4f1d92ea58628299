use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::FULL_VESTING_PERCENTAGE;
use crate::errors::OfferError;

/// One `(year, percentage)` cell of a custom vesting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VestingEntry {
    /// 1-indexed vesting year.
    pub year: u32,
    /// Share of the grant vesting that year, in percent.
    pub percentage: f64,
}

impl VestingEntry {
    pub fn new(year: u32, percentage: f64) -> Self {
        Self { year, percentage }
    }
}

/// Immutable sparse mapping from vesting year to percentage.
///
/// Years missing from the schedule vest 0%. Duplicate years are rejected at
/// construction, so every lookup has exactly one answer. Edits go through
/// [`VestingSchedule::with_percentage`], which returns a new schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VestingEntry>", into = "Vec<VestingEntry>")]
pub struct VestingSchedule {
    entries: BTreeMap<u32, f64>,
}

impl VestingSchedule {
    /// Build a schedule from `(year, percentage)` entries.
    ///
    /// Fails on year 0 and on any year listed twice.
    pub fn new(entries: impl IntoIterator<Item = VestingEntry>) -> Result<Self, OfferError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if entry.year == 0 {
                return Err(OfferError::InvalidVestingYear { year: entry.year });
            }
            if map.insert(entry.year, entry.percentage).is_some() {
                return Err(OfferError::DuplicateVestingYear { year: entry.year });
            }
        }
        Ok(Self { entries: map })
    }

    /// Equal split over `years`: every year gets `100 / years` percent.
    /// Zero years yields an empty schedule.
    pub fn equal_split(years: u32) -> Self {
        if years == 0 {
            return Self::default();
        }
        let share = FULL_VESTING_PERCENTAGE / years as f64;
        Self {
            entries: (1..=years).map(|year| (year, share)).collect(),
        }
    }

    /// Return a copy with `year` set to `percentage`, inserting it if absent.
    pub fn with_percentage(&self, year: u32, percentage: f64) -> Result<Self, OfferError> {
        if year == 0 {
            return Err(OfferError::InvalidVestingYear { year });
        }
        let mut entries = self.entries.clone();
        entries.insert(year, percentage);
        Ok(Self { entries })
    }

    /// Percentage vesting in `year`; 0 when the year is not listed.
    pub fn percentage_for(&self, year: u32) -> f64 {
        self.entries.get(&year).copied().unwrap_or(0.0)
    }

    /// Sum of every listed percentage, regardless of the vesting period.
    pub fn total_percentage(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Entries in ascending year order.
    pub fn entries(&self) -> impl Iterator<Item = VestingEntry> + '_ {
        self.entries
            .iter()
            .map(|(&year, &percentage)| VestingEntry { year, percentage })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every percentage is finite and non-negative.
    pub fn validate(&self) -> Result<(), OfferError> {
        for entry in self.entries() {
            if !entry.percentage.is_finite() || entry.percentage < 0.0 {
                return Err(OfferError::InvalidVestingPercentage {
                    year: entry.year,
                    value: entry.percentage,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<VestingEntry>> for VestingSchedule {
    type Error = OfferError;

    fn try_from(entries: Vec<VestingEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<VestingSchedule> for Vec<VestingEntry> {
    fn from(schedule: VestingSchedule) -> Self {
        schedule.entries().collect()
    }
}

/// How the stock grant is spread over the vesting period.
///
/// `Equal` carries no schedule; `Custom` always carries one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VestingMode {
    /// `100 / vesting_years` percent every year.
    #[default]
    Equal,
    /// Explicit per-year percentages.
    Custom {
        #[ts(as = "Vec<VestingEntry>")]
        schedule: VestingSchedule,
    },
}

impl VestingMode {
    pub fn custom(schedule: VestingSchedule) -> Self {
        Self::Custom { schedule }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// The custom schedule, if any.
    pub fn schedule(&self) -> Option<&VestingSchedule> {
        match self {
            Self::Equal => None,
            Self::Custom { schedule } => Some(schedule),
        }
    }
}
