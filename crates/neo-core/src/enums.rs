//! Threat levels, record discriminators, and feed origins.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! except [`ThreatLevel`], which serializes in the upper-case form shown to users.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ThreatLevel
// ---------------------------------------------------------------------------

/// Coarse classification of a risk score.
///
/// ```text
///  0 ..= 29  → LOW
/// 30 ..= 59  → MODERATE
/// 60 ..= 100 → ELEVATED
/// ```
///
/// Variants are declared in ascending order so `Ord` follows severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Low,
    Moderate,
    Elevated,
}

impl ThreatLevel {
    /// Lowest score classified as [`ThreatLevel::Moderate`].
    pub const MODERATE_FLOOR: u8 = 30;

    /// Lowest score classified as [`ThreatLevel::Elevated`].
    pub const ELEVATED_FLOOR: u8 = 60;

    /// Classify a risk score. Boundaries are inclusive on the lower side.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < Self::MODERATE_FLOOR {
            Self::Low
        } else if score < Self::ELEVATED_FLOOR {
            Self::Moderate
        } else {
            Self::Elevated
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Elevated => "ELEVATED",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordType
// ---------------------------------------------------------------------------

/// Discriminator for records sharing the one store collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    User,
    Watch,
}

impl RecordType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Watch => "watch",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedOrigin
// ---------------------------------------------------------------------------

/// Where a feed batch came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrigin {
    /// Parsed from the upstream feed.
    #[default]
    Live,
    /// Generated locally because the feed was unavailable.
    Fallback,
}

impl FeedOrigin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for FeedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, ThreatLevel::Low)]
    #[case(29, ThreatLevel::Low)]
    #[case(30, ThreatLevel::Moderate)]
    #[case(59, ThreatLevel::Moderate)]
    #[case(60, ThreatLevel::Elevated)]
    #[case(100, ThreatLevel::Elevated)]
    fn threat_level_boundaries(#[case] score: u8, #[case] expected: ThreatLevel) {
        assert_eq!(ThreatLevel::from_score(score), expected);
    }

    #[test]
    fn threat_levels_order_by_severity() {
        assert!(ThreatLevel::Low < ThreatLevel::Moderate);
        assert!(ThreatLevel::Moderate < ThreatLevel::Elevated);
    }

    #[test]
    fn threat_level_serializes_upper_case() {
        let json = serde_json::to_string(&ThreatLevel::Elevated).unwrap();
        assert_eq!(json, "\"ELEVATED\"");
        assert_eq!(ThreatLevel::Moderate.to_string(), "MODERATE");
    }

    #[test]
    fn record_type_roundtrips_snake_case() {
        let json = serde_json::to_string(&RecordType::Watch).unwrap();
        assert_eq!(json, "\"watch\"");
        let back: RecordType = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(back, RecordType::User);
    }
}
