use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Hundredths per kcal.
const SCALE: f64 = 100.0;

/// Largest magnitude, in hundredths, that converts from `f64` without loss.
const MAX_HUNDREDTHS: f64 = 9.0e15;

/// A calorie amount in fixed-point hundredths of a kcal.
///
/// Sums are exact, so totals agree whatever order entries are added in.
/// Input is rounded to the nearest hundredth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Calories(i64);

impl Calories {
    pub const ZERO: Calories = Calories(0);

    /// Convert a kcal value. Non-finite or out-of-range values give `None`.
    pub fn from_kcal(kcal: f64) -> Option<Self> {
        let scaled = (kcal * SCALE).round();
        if scaled.is_finite() && scaled.abs() <= MAX_HUNDREDTHS {
            Some(Calories(scaled as i64))
        } else {
            None
        }
    }

    pub fn from_hundredths(hundredths: i64) -> Self {
        Calories(hundredths)
    }

    pub fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn as_kcal(&self) -> f64 {
        self.0 as f64 / SCALE
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Calories {
    type Output = Calories;

    fn add(self, rhs: Calories) -> Calories {
        Calories(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Calories {
    type Output = Calories;

    fn sub(self, rhs: Calories) -> Calories {
        Calories(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Calories {
    fn sum<I: Iterator<Item = Calories>>(iter: I) -> Self {
        iter.fold(Calories::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Calories> for Calories {
    fn sum<I: Iterator<Item = &'a Calories>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl TryFrom<f64> for Calories {
    type Error = TrackerError;

    fn try_from(kcal: f64) -> Result<Self, Self::Error> {
        Calories::from_kcal(kcal)
            .ok_or_else(|| TrackerError::InvalidInput(format!("{} is not a calorie amount", kcal)))
    }
}

impl From<Calories> for f64 {
    fn from(calories: Calories) -> f64 {
        calories.as_kcal()
    }
}

impl FromStr for Calories {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kcal: f64 = s
            .trim()
            .parse()
            .map_err(|_| TrackerError::InvalidInput(format!("'{}' is not a number", s.trim())))?;
        Calories::try_from(kcal)
    }
}

/// Shortest decimal form: `140`, `150.5`, `0.3`.
impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_kcal())
    }
}
