//! Shared 1-3 rating rubric used by the interviewer scorecard and the
//! scenario scoring flow.

use serde::Serialize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 3;

/// Qualitative band derived from an average rating. Thresholds are fixed:
/// 2.5 and above reads Strong, 1.5 and above reads Adequate, anything lower
/// reads Concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScaleBand {
    Strong,
    Adequate,
    Concern,
}

impl ScaleBand {
    pub fn for_average(average: f64) -> Self {
        if average >= 2.5 {
            Self::Strong
        } else if average >= 1.5 {
            Self::Adequate
        } else {
            Self::Concern
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Adequate => "Adequate",
            Self::Concern => "Concern",
        }
    }
}

/// Round to two decimal places, matching the precision recorded in the
/// hiring spreadsheet.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn is_valid_rating(value: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(ScaleBand::for_average(2.5), ScaleBand::Strong);
        assert_eq!(ScaleBand::for_average(2.49), ScaleBand::Adequate);
        assert_eq!(ScaleBand::for_average(1.5), ScaleBand::Adequate);
        assert_eq!(ScaleBand::for_average(1.49), ScaleBand::Concern);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(7.0 / 3.0), 2.33);
        assert_eq!(round2(8.0 / 3.0), 2.67);
        assert_eq!(round2(2.0), 2.0);
    }
}
