// The single table of durable slot keys. The literals are load-bearing:
// they address data persisted by earlier versions of the application, so
// they stay exactly as first written (mixed camel/snake and all). No call
// site spells one of these as an inline string.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StoreKey {
    #[serde(rename = "mediaBatchRecords")]
    MediaBatch,
    #[serde(rename = "autoclaveRecords")]
    Autoclave,
    #[serde(rename = "subculture_records")]
    Subculture,
    #[serde(rename = "incubation_records")]
    Incubation,
    #[serde(rename = "indoorSampling_records")]
    IndoorSampling,
    #[serde(rename = "outdoorSampling_records")]
    OutdoorSampling,
    #[serde(rename = "primaryHardening_records")]
    PrimaryHardening,
    #[serde(rename = "secondaryHardening_records")]
    SecondaryHardening,
    #[serde(rename = "mortality_records")]
    Mortality,
    #[serde(rename = "holdingArea_records")]
    HoldingArea,
}

impl StoreKey {
    pub const ALL: [StoreKey; 10] = [
        StoreKey::MediaBatch,
        StoreKey::Autoclave,
        StoreKey::Subculture,
        StoreKey::Incubation,
        StoreKey::IndoorSampling,
        StoreKey::OutdoorSampling,
        StoreKey::PrimaryHardening,
        StoreKey::SecondaryHardening,
        StoreKey::Mortality,
        StoreKey::HoldingArea,
    ];

    /// Key the slot is addressed by in durable storage.
    pub fn slot_name(self) -> &'static str {
        match self {
            Self::MediaBatch => "mediaBatchRecords",
            Self::Autoclave => "autoclaveRecords",
            Self::Subculture => "subculture_records",
            Self::Incubation => "incubation_records",
            Self::IndoorSampling => "indoorSampling_records",
            Self::OutdoorSampling => "outdoorSampling_records",
            Self::PrimaryHardening => "primaryHardening_records",
            Self::SecondaryHardening => "secondaryHardening_records",
            Self::Mortality => "mortality_records",
            Self::HoldingArea => "holdingArea_records",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MediaBatch => "media batches",
            Self::Autoclave => "autoclave cycles",
            Self::Subculture => "subcultures",
            Self::Incubation => "incubation runs",
            Self::IndoorSampling => "indoor samples",
            Self::OutdoorSampling => "outdoor samples",
            Self::PrimaryHardening => "primary hardening batches",
            Self::SecondaryHardening => "secondary hardening batches",
            Self::Mortality => "mortality events",
            Self::HoldingArea => "holding area lots",
        }
    }

    /// Accepts the slot literal or a hyphenated short name, for the CLI.
    pub fn parse(text: &str) -> Option<Self> {
        let norm = text.trim().to_ascii_lowercase();
        for key in Self::ALL {
            if norm == key.slot_name().to_ascii_lowercase() {
                return Some(key);
            }
        }
        match norm.as_str() {
            "media-batches" | "media" => Some(Self::MediaBatch),
            "autoclave" | "autoclave-cycles" => Some(Self::Autoclave),
            "subcultures" | "subculture" => Some(Self::Subculture),
            "incubation" | "incubations" => Some(Self::Incubation),
            "indoor-sampling" | "indoor-samples" => Some(Self::IndoorSampling),
            "outdoor-sampling" | "outdoor-samples" => Some(Self::OutdoorSampling),
            "primary-hardening" => Some(Self::PrimaryHardening),
            "secondary-hardening" => Some(Self::SecondaryHardening),
            "mortality" => Some(Self::Mortality),
            "holding-area" | "holding" => Some(Self::HoldingArea),
            _ => None,
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slot_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slot_names_are_distinct() {
        let names: HashSet<&str> = StoreKey::ALL.iter().map(|k| k.slot_name()).collect();
        assert_eq!(names.len(), StoreKey::ALL.len());
    }

    #[test]
    fn parse_accepts_slot_literal_and_short_name() {
        assert_eq!(
            StoreKey::parse("mediaBatchRecords"),
            Some(StoreKey::MediaBatch)
        );
        assert_eq!(StoreKey::parse("media-batches"), Some(StoreKey::MediaBatch));
        assert_eq!(
            StoreKey::parse("secondaryHardening_records"),
            Some(StoreKey::SecondaryHardening)
        );
        assert_eq!(StoreKey::parse("holding"), Some(StoreKey::HoldingArea));
        assert_eq!(StoreKey::parse("greenhouse"), None);
    }

    #[test]
    fn serde_uses_the_slot_literal() {
        assert_eq!(
            serde_json::to_string(&StoreKey::Subculture).unwrap(),
            "\"subculture_records\""
        );
        let back: StoreKey = serde_json::from_str("\"holdingArea_records\"").unwrap();
        assert_eq!(back, StoreKey::HoldingArea);
    }
}
