//! Calendar month parsed from three-letter folder names.

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

/// One calendar month, keyed by its English three-letter abbreviation.
///
/// Variant order is chronological, so `Ord` sorts Jan before Dec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Returns the month for `1..=12`, `None` otherwise.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Month number in `1..=12`.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Canonical folder name, e.g. `Mar`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Parses an exact abbreviation, ignoring ASCII case.
    ///
    /// `"mar"` and `"MAR"` parse; `"March"` and `" Mar"` do not.
    pub fn parse_abbreviation(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.abbreviation().eq_ignore_ascii_case(name))
    }

    /// Month of `time` in the local timezone of this process.
    pub fn from_system_time(time: SystemTime) -> Self {
        let local: DateTime<Local> = time.into();
        Self::ALL[local.month0() as usize]
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}
