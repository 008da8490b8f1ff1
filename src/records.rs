// The ten flat domain record types. Wire field names match the payloads the
// original browser application persisted (camelCase with a few historical
// oddities like `sourceID` and `daysinHolding`), so old slots still load.

use crate::error::VitroLabError;
use crate::status::Status;
use crate::storage_keys::StoreKey;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of domain data: a uniquely keyed record with a lifecycle status.
///
/// `field_text` projects every scalar field to its string form, in
/// declaration order; the store's search matches a term against any of
/// them. `batch_ref` exposes the informal cross-store reference some
/// records carry (no existence check is performed on it).
pub trait DomainRecord: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    const STORE: StoreKey;

    fn id(&self) -> &str;
    fn status(&self) -> Status;

    fn batch_ref(&self) -> Option<&str> {
        None
    }

    fn field_text(&self) -> Vec<String>;

    fn validate(&self) -> Result<(), VitroLabError> {
        if self.id().trim().is_empty() {
            return Err(VitroLabError::Validation(format!(
                "{} record is missing an identifier",
                Self::STORE.label()
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaBatchRecord {
    pub id: String,
    pub prep_date: String,
    pub media_type: String,
    pub quantity: String,
    pub p_h: String,
    pub prepared_by: String,
    pub status: Status,
}

impl DomainRecord for MediaBatchRecord {
    const STORE: StoreKey = StoreKey::MediaBatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.prep_date.clone(),
            self.media_type.clone(),
            self.quantity.clone(),
            self.p_h.clone(),
            self.prepared_by.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoclaveRecord {
    pub id: String,
    pub date: String,
    /// Media batch this cycle sterilized, e.g. "MB-2024-001".
    pub batch: String,
    pub temperature: String,
    pub pressure: String,
    pub duration: String,
    pub status: Status,
}

impl DomainRecord for AutoclaveRecord {
    const STORE: StoreKey = StoreKey::Autoclave;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.batch.clone(),
            self.temperature.clone(),
            self.pressure.clone(),
            self.duration.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcultureRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "sourceID")]
    pub source_id: String,
    pub crop: String,
    pub variety: String,
    pub stage: String,
    #[serde(default)]
    pub explants: u32,
    pub media_used: String,
    pub technician: String,
    pub status: Status,
}

impl DomainRecord for SubcultureRecord {
    const STORE: StoreKey = StoreKey::Subculture;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.source_id)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.source_id.clone(),
            self.crop.clone(),
            self.variety.clone(),
            self.stage.clone(),
            self.explants.to_string(),
            self.media_used.clone(),
            self.technician.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncubationRecord {
    pub id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub start_date: String,
    pub duration: String,
    pub temperature: String,
    pub light: String,
    pub humidity: String,
    pub chamber: String,
    pub observations: String,
    pub status: Status,
}

impl DomainRecord for IncubationRecord {
    const STORE: StoreKey = StoreKey::Incubation;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_id)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.batch_id.clone(),
            self.start_date.clone(),
            self.duration.clone(),
            self.temperature.clone(),
            self.light.clone(),
            self.humidity.clone(),
            self.chamber.clone(),
            self.observations.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndoorSamplingRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub sample_type: String,
    pub test_type: String,
    pub result: String,
    pub tested_by: String,
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gov_verified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_number: Option<String>,
    pub status: Status,
}

impl DomainRecord for IndoorSamplingRecord {
    const STORE: StoreKey = StoreKey::IndoorSampling;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_id)
    }

    fn field_text(&self) -> Vec<String> {
        let mut out = vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_id.clone(),
            self.sample_type.clone(),
            self.test_type.clone(),
            self.result.clone(),
            self.tested_by.clone(),
            self.remarks.clone(),
        ];
        out.extend(self.gov_verified.clone());
        out.extend(self.cert_number.clone());
        out.push(self.status.to_string());
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutdoorSamplingRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub stage: String,
    pub crop: String,
    pub sample_type: String,
    pub test_type: String,
    pub result: String,
    pub tested_by: String,
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gov_verified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_number: Option<String>,
    pub status: Status,
}

impl DomainRecord for OutdoorSamplingRecord {
    const STORE: StoreKey = StoreKey::OutdoorSampling;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_id)
    }

    fn field_text(&self) -> Vec<String> {
        let mut out = vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_id.clone(),
            self.stage.clone(),
            self.crop.clone(),
            self.sample_type.clone(),
            self.test_type.clone(),
            self.result.clone(),
            self.tested_by.clone(),
            self.remarks.clone(),
        ];
        out.extend(self.gov_verified.clone());
        out.extend(self.cert_number.clone());
        out.push(self.status.to_string());
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryHardeningRecord {
    pub id: String,
    pub date: String,
    pub batch_name: String,
    pub crop: String,
    pub tunnel: String,
    pub bed: String,
    pub row: String,
    pub cavity: String,
    #[serde(default)]
    pub plants: u32,
    #[serde(default)]
    pub workers: u32,
    pub waiting_period: String,
    pub status: Status,
}

impl DomainRecord for PrimaryHardeningRecord {
    const STORE: StoreKey = StoreKey::PrimaryHardening;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_name)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_name.clone(),
            self.crop.clone(),
            self.tunnel.clone(),
            self.bed.clone(),
            self.row.clone(),
            self.cavity.clone(),
            self.plants.to_string(),
            self.workers.to_string(),
            self.waiting_period.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryHardeningRecord {
    pub id: String,
    pub date: String,
    pub batch_name: String,
    pub crop: String,
    pub tunnel: String,
    pub bed: String,
    pub row: String,
    pub cavity: String,
    #[serde(default)]
    pub plants: u32,
    #[serde(default)]
    pub workers: u32,
    pub waiting_period: String,
    /// Free text percentage, e.g. "96%".
    pub survivability: String,
    pub status: Status,
}

impl DomainRecord for SecondaryHardeningRecord {
    const STORE: StoreKey = StoreKey::SecondaryHardening;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_name)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_name.clone(),
            self.crop.clone(),
            self.tunnel.clone(),
            self.bed.clone(),
            self.row.clone(),
            self.cavity.clone(),
            self.plants.to_string(),
            self.workers.to_string(),
            self.waiting_period.clone(),
            self.survivability.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortalityRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub crop: String,
    pub stage: String,
    #[serde(default)]
    pub initial_count: u32,
    #[serde(default)]
    pub mortality: u32,
    pub mortality_rate: String,
    pub cause: String,
    pub action: String,
    pub status: Status,
}

impl DomainRecord for MortalityRecord {
    const STORE: StoreKey = StoreKey::Mortality;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_id)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_id.clone(),
            self.crop.clone(),
            self.stage.clone(),
            self.initial_count.to_string(),
            self.mortality.to_string(),
            self.mortality_rate.clone(),
            self.cause.clone(),
            self.action.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingAreaRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub crop: String,
    pub variety: String,
    #[serde(default)]
    pub quantity: u32,
    pub location: String,
    // Historical wire name, kept as persisted by earlier versions.
    #[serde(rename = "daysinHolding", default)]
    pub days_in_holding: u32,
    pub condition: String,
    pub dispatch_date: String,
    pub status: Status,
}

impl DomainRecord for HoldingAreaRecord {
    const STORE: StoreKey = StoreKey::HoldingArea;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn batch_ref(&self) -> Option<&str> {
        Some(&self.batch_id)
    }

    fn field_text(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.batch_id.clone(),
            self.crop.clone(),
            self.variety.clone(),
            self.quantity.to_string(),
            self.location.clone(),
            self.days_in_holding.to_string(),
            self.condition.clone(),
            self.dispatch_date.clone(),
            self.status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_batch_uses_the_original_wire_names() {
        let json = r#"{
            "id": "MB-2024-001",
            "prepDate": "2024-11-18",
            "mediaType": "MS Medium",
            "quantity": "5L",
            "pH": "5.8",
            "preparedBy": "Rajesh Kumar",
            "status": "completed"
        }"#;
        let record: MediaBatchRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.prep_date, "2024-11-18");
        assert_eq!(record.p_h, "5.8");
        assert_eq!(record.status, Status::Completed);

        let out = serde_json::to_value(&record).expect("serialize");
        assert!(out.get("prepDate").is_some());
        assert!(out.get("pH").is_some());
        assert!(out.get("preparedBy").is_some());
    }

    #[test]
    fn subculture_keeps_historical_source_id_name_and_defaults_counts() {
        let json = r#"{
            "id": "SC-2024-009",
            "date": "2024-11-25",
            "sourceID": "MB-2024-002",
            "crop": "Banana",
            "variety": "Grand Naine",
            "stage": "Stage 1",
            "mediaUsed": "MS Medium",
            "technician": "Priya Sharma",
            "status": "pending"
        }"#;
        let record: SubcultureRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.source_id, "MB-2024-002");
        assert_eq!(record.explants, 0, "absent count parses to zero");
        assert_eq!(record.batch_ref(), Some("MB-2024-002"));
    }

    #[test]
    fn holding_area_keeps_daysin_holding_wire_name() {
        let json = r#"{
            "id": "HA-2024-001",
            "date": "2024-11-18",
            "batchID": "SH-2024-001",
            "crop": "Banana",
            "variety": "Grand Naine",
            "quantity": 1950,
            "location": "Zone A-1",
            "daysinHolding": 3,
            "condition": "Excellent",
            "dispatchDate": "2024-11-25",
            "status": "active"
        }"#;
        let record: HoldingAreaRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.days_in_holding, 3);
        let out = serde_json::to_value(&record).expect("serialize");
        assert!(out.get("daysinHolding").is_some());
        assert!(out.get("dispatchDate").is_some());
    }

    #[test]
    fn optional_certification_fields_are_omitted_when_absent() {
        let record = IndoorSamplingRecord {
            id: "IS-2024-009".into(),
            date: "2024-11-25".into(),
            batch_id: "SC-2024-001".into(),
            sample_type: "Contamination Check".into(),
            test_type: "Visual Inspection".into(),
            result: "Clean".into(),
            tested_by: "Lab Tech A".into(),
            remarks: "".into(),
            gov_verified: None,
            cert_number: None,
            status: Status::Pending,
        };
        let out = serde_json::to_value(&record).expect("serialize");
        assert!(out.get("govVerified").is_none());
        assert!(out.get("certNumber").is_none());
    }

    #[test]
    fn blank_identifier_fails_validation() {
        let record = MediaBatchRecord {
            id: "  ".into(),
            prep_date: "2024-11-18".into(),
            media_type: "MS Medium".into(),
            quantity: "5L".into(),
            p_h: "5.8".into(),
            prepared_by: "Rajesh Kumar".into(),
            status: Status::Pending,
        };
        let err = record.validate().expect_err("should reject");
        assert!(err.to_string().contains("identifier"), "got: {err}");
    }

    #[test]
    fn field_text_covers_every_scalar_field() {
        let record = MortalityRecord {
            id: "MR-2024-001".into(),
            date: "2024-11-20".into(),
            batch_id: "PH-2024-001".into(),
            crop: "Banana".into(),
            stage: "Primary".into(),
            initial_count: 2500,
            mortality: 80,
            mortality_rate: "3.2%".into(),
            cause: "Transplant shock".into(),
            action: "Adjusted watering".into(),
            status: Status::Active,
        };
        let text = record.field_text();
        assert!(text.contains(&"2500".to_string()));
        assert!(text.contains(&"Transplant shock".to_string()));
        assert!(text.contains(&"active".to_string()));
    }
}
