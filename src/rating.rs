//! Star display for average ratings and the 1-5 value users submit.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

pub const DEFAULT_MAX_STARS: u32 = 5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

/// How many full, half and empty stars an average rating is drawn with.
///
/// `full + half + empty` always equals the star count it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u32,
    /// 0 or 1.
    pub half: u32,
    pub empty: u32,
}

impl StarBreakdown {
    /// Break `rating` down into stars out of `max_stars`.
    ///
    /// Ratings outside `0..=max_stars` (and NaN) come from malformed data and
    /// are clamped first.
    pub fn compute(rating: f64, max_stars: u32) -> Self {
        let max = f64::from(max_stars);
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, max)
        };

        let full = rating.floor() as u32;
        let half = u32::from(rating.fract() >= 0.5);
        let empty = max_stars.saturating_sub(full + half);

        Self { full, half, empty }
    }

    pub fn total(&self) -> u32 {
        self.full + self.half + self.empty
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.total() as usize * 3);
        out.extend(std::iter::repeat(FULL_STAR).take(self.full as usize));
        out.extend(std::iter::repeat(HALF_STAR).take(self.half as usize));
        out.extend(std::iter::repeat(EMPTY_STAR).take(self.empty as usize));
        out
    }
}

/// A rating a user hands out after a trip. Always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}
