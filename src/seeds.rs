// Default record sets used when a durable slot is absent or unreadable.
// These are the datasets the operation started from; hydration falls back
// here rather than to empty stores so a wiped cache never blanks the UI.

use crate::records::{
    AutoclaveRecord, HoldingAreaRecord, IncubationRecord, IndoorSamplingRecord, MediaBatchRecord,
    MortalityRecord, OutdoorSamplingRecord, PrimaryHardeningRecord, SecondaryHardeningRecord,
    SubcultureRecord,
};
use crate::status::Status;

pub fn media_batches() -> Vec<MediaBatchRecord> {
    vec![
        MediaBatchRecord {
            id: "MB-2024-001".into(),
            prep_date: "2024-11-18".into(),
            media_type: "MS Medium".into(),
            quantity: "5L".into(),
            p_h: "5.8".into(),
            prepared_by: "Rajesh Kumar".into(),
            status: Status::Completed,
        },
        MediaBatchRecord {
            id: "MB-2024-002".into(),
            prep_date: "2024-11-19".into(),
            media_type: "WPM Medium".into(),
            quantity: "3L".into(),
            p_h: "5.7".into(),
            prepared_by: "Priya Sharma".into(),
            status: Status::Active,
        },
        MediaBatchRecord {
            id: "MB-2024-003".into(),
            prep_date: "2024-11-20".into(),
            media_type: "MS Medium".into(),
            quantity: "4L".into(),
            p_h: "5.8".into(),
            prepared_by: "Amit Patel".into(),
            status: Status::Pending,
        },
    ]
}

pub fn autoclave_cycles() -> Vec<AutoclaveRecord> {
    let cycle = |id: &str, date: &str, batch: &str, status| AutoclaveRecord {
        id: id.into(),
        date: date.into(),
        batch: batch.into(),
        temperature: "121°C".into(),
        pressure: "15 PSI".into(),
        duration: "20 min".into(),
        status,
    };
    vec![
        cycle("AC-001", "2024-11-20", "MB-2024-001", Status::Completed),
        cycle("AC-002", "2024-11-21", "MB-2024-002", Status::Active),
        cycle("AC-003", "2024-11-22", "MB-2024-003", Status::Pending),
        cycle("AC-004", "2024-11-22", "MB-2024-004", Status::Contaminated),
    ]
}

pub fn subcultures() -> Vec<SubcultureRecord> {
    vec![
        SubcultureRecord {
            id: "SC-2024-001".into(),
            date: "2024-11-20".into(),
            source_id: "MB-2024-001".into(),
            crop: "Banana".into(),
            variety: "Grand Naine".into(),
            stage: "Stage 1".into(),
            explants: 25,
            media_used: "MS Medium".into(),
            technician: "Rajesh Kumar".into(),
            status: Status::Active,
        },
        SubcultureRecord {
            id: "SC-2024-002".into(),
            date: "2024-11-21".into(),
            source_id: "MB-2024-002".into(),
            crop: "Bamboo".into(),
            variety: "Dendrocalamus".into(),
            stage: "Stage 2".into(),
            explants: 30,
            media_used: "WPM Medium".into(),
            technician: "Priya Sharma".into(),
            status: Status::Completed,
        },
        SubcultureRecord {
            id: "SC-2024-003".into(),
            date: "2024-11-22".into(),
            source_id: "MB-2024-003".into(),
            crop: "Teak".into(),
            variety: "Tectona grandis".into(),
            stage: "Stage 1".into(),
            explants: 20,
            media_used: "MS Medium".into(),
            technician: "Amit Patel".into(),
            status: Status::Pending,
        },
        SubcultureRecord {
            id: "SC-2024-004".into(),
            date: "2024-11-22".into(),
            source_id: "MB-2024-004".into(),
            crop: "Ornamental".into(),
            variety: "Anthurium".into(),
            stage: "Stage 3".into(),
            explants: 15,
            media_used: "B5 Medium".into(),
            technician: "Sunita Verma".into(),
            status: Status::Contaminated,
        },
    ]
}

pub fn incubation_runs() -> Vec<IncubationRecord> {
    vec![
        IncubationRecord {
            id: "INC-2024-001".into(),
            batch_id: "SC-2024-001".into(),
            start_date: "2024-11-15".into(),
            duration: "14 days".into(),
            temperature: "25°C".into(),
            light: "16h/day".into(),
            humidity: "60%".into(),
            chamber: "IC-01".into(),
            observations: "Normal growth".into(),
            status: Status::Active,
        },
        IncubationRecord {
            id: "INC-2024-002".into(),
            batch_id: "SC-2024-002".into(),
            start_date: "2024-11-16".into(),
            duration: "14 days".into(),
            temperature: "25°C".into(),
            light: "16h/day".into(),
            humidity: "60%".into(),
            chamber: "IC-02".into(),
            observations: "Excellent response".into(),
            status: Status::Completed,
        },
        IncubationRecord {
            id: "INC-2024-003".into(),
            batch_id: "SC-2024-003".into(),
            start_date: "2024-11-18".into(),
            duration: "14 days".into(),
            temperature: "25°C".into(),
            light: "16h/day".into(),
            humidity: "58%".into(),
            chamber: "IC-01".into(),
            observations: "Monitoring required".into(),
            status: Status::Pending,
        },
        IncubationRecord {
            id: "INC-2024-004".into(),
            batch_id: "SC-2024-004".into(),
            start_date: "2024-11-19".into(),
            duration: "7 days".into(),
            temperature: "26°C".into(),
            light: "16h/day".into(),
            humidity: "65%".into(),
            chamber: "IC-03".into(),
            observations: "Temperature fluctuation".into(),
            status: Status::Contaminated,
        },
    ]
}

pub fn indoor_samples() -> Vec<IndoorSamplingRecord> {
    vec![
        IndoorSamplingRecord {
            id: "IS-2024-001".into(),
            date: "2024-11-20".into(),
            batch_id: "SC-2024-001".into(),
            sample_type: "Contamination Check".into(),
            test_type: "Visual Inspection".into(),
            result: "Clean".into(),
            tested_by: "Lab Tech A".into(),
            remarks: "No signs of contamination".into(),
            gov_verified: Some("Yes".into()),
            cert_number: Some("CERT-IN-2024-001".into()),
            status: Status::Completed,
        },
        IndoorSamplingRecord {
            id: "IS-2024-002".into(),
            date: "2024-11-21".into(),
            batch_id: "SC-2024-002".into(),
            sample_type: "Growth Rate".into(),
            test_type: "Microscopy".into(),
            result: "Normal".into(),
            tested_by: "Lab Tech B".into(),
            remarks: "Healthy cell division observed".into(),
            gov_verified: Some("Yes".into()),
            cert_number: Some("CERT-IN-2024-002".into()),
            status: Status::Completed,
        },
        IndoorSamplingRecord {
            id: "IS-2024-003".into(),
            date: "2024-11-22".into(),
            batch_id: "SC-2024-003".into(),
            sample_type: "Contamination Check".into(),
            test_type: "Culture Test".into(),
            result: "Suspicious".into(),
            tested_by: "Lab Tech A".into(),
            remarks: "Requires further testing".into(),
            gov_verified: Some("No".into()),
            cert_number: Some("".into()),
            status: Status::Active,
        },
    ]
}

pub fn outdoor_samples() -> Vec<OutdoorSamplingRecord> {
    vec![
        OutdoorSamplingRecord {
            id: "OS-2024-001".into(),
            date: "2024-11-20".into(),
            batch_id: "PH-2024-001".into(),
            stage: "Primary".into(),
            crop: "Banana".into(),
            sample_type: "Plant Health".into(),
            test_type: "Leaf Analysis".into(),
            result: "Healthy".into(),
            tested_by: "Field Tech A".into(),
            remarks: "Normal chlorophyll levels".into(),
            gov_verified: Some("Yes".into()),
            cert_number: Some("CERT-2024-001".into()),
            status: Status::Completed,
        },
        OutdoorSamplingRecord {
            id: "OS-2024-002".into(),
            date: "2024-11-21".into(),
            batch_id: "SH-2024-001".into(),
            stage: "Secondary".into(),
            crop: "Bamboo".into(),
            sample_type: "Soil Quality".into(),
            test_type: "pH & Nutrients".into(),
            result: "Optimal".into(),
            tested_by: "Field Tech B".into(),
            remarks: "pH: 6.5, good nutrient balance".into(),
            gov_verified: Some("Yes".into()),
            cert_number: Some("CERT-2024-002".into()),
            status: Status::Completed,
        },
        OutdoorSamplingRecord {
            id: "OS-2024-003".into(),
            date: "2024-11-22".into(),
            batch_id: "PH-2024-003".into(),
            stage: "Primary".into(),
            crop: "Teak".into(),
            sample_type: "Pest & Disease".into(),
            test_type: "Visual Inspection".into(),
            result: "Minor pest detected".into(),
            tested_by: "Field Tech A".into(),
            remarks: "Treatment applied".into(),
            gov_verified: Some("No".into()),
            cert_number: Some("".into()),
            status: Status::Active,
        },
        OutdoorSamplingRecord {
            id: "OS-2024-004".into(),
            date: "2024-11-22".into(),
            batch_id: "SH-2024-004".into(),
            stage: "Secondary".into(),
            crop: "Ornamental".into(),
            sample_type: "Water Quality".into(),
            test_type: "Contamination".into(),
            result: "Bacterial presence".into(),
            tested_by: "Field Tech C".into(),
            remarks: "Irrigation system flushed".into(),
            gov_verified: Some("No".into()),
            cert_number: Some("".into()),
            status: Status::Contaminated,
        },
    ]
}

pub fn primary_hardening() -> Vec<PrimaryHardeningRecord> {
    vec![
        PrimaryHardeningRecord {
            id: "PH-2024-001".into(),
            date: "2024-11-15".into(),
            batch_name: "Banana-GN-Nov".into(),
            crop: "Banana".into(),
            tunnel: "T1".into(),
            bed: "B1".into(),
            row: "R1-R5".into(),
            cavity: "50".into(),
            plants: 2500,
            workers: 4,
            waiting_period: "14 days".into(),
            status: Status::Active,
        },
        PrimaryHardeningRecord {
            id: "PH-2024-002".into(),
            date: "2024-11-16".into(),
            batch_name: "Bamboo-DC-Nov".into(),
            crop: "Bamboo".into(),
            tunnel: "T2".into(),
            bed: "B2".into(),
            row: "R1-R3".into(),
            cavity: "72".into(),
            plants: 1800,
            workers: 3,
            waiting_period: "21 days".into(),
            status: Status::Active,
        },
        PrimaryHardeningRecord {
            id: "PH-2024-003".into(),
            date: "2024-11-18".into(),
            batch_name: "Teak-TG-Nov".into(),
            crop: "Teak".into(),
            tunnel: "T1".into(),
            bed: "B3".into(),
            row: "R1-R4".into(),
            cavity: "50".into(),
            plants: 2000,
            workers: 3,
            waiting_period: "28 days".into(),
            status: Status::Pending,
        },
        PrimaryHardeningRecord {
            id: "PH-2024-004".into(),
            date: "2024-11-10".into(),
            batch_name: "Ornamental-A-Nov".into(),
            crop: "Ornamental".into(),
            tunnel: "T3".into(),
            bed: "B1".into(),
            row: "R1-R6".into(),
            cavity: "40".into(),
            plants: 3000,
            workers: 5,
            waiting_period: "14 days".into(),
            status: Status::Completed,
        },
    ]
}

pub fn secondary_hardening() -> Vec<SecondaryHardeningRecord> {
    vec![
        SecondaryHardeningRecord {
            id: "SH-2024-001".into(),
            date: "2024-11-10".into(),
            batch_name: "Banana-GN-Oct".into(),
            crop: "Banana".into(),
            tunnel: "SH-T1".into(),
            bed: "SB1".into(),
            row: "SR1-SR4".into(),
            cavity: "72".into(),
            plants: 2000,
            workers: 3,
            waiting_period: "21 days".into(),
            survivability: "96%".into(),
            status: Status::Completed,
        },
        SecondaryHardeningRecord {
            id: "SH-2024-002".into(),
            date: "2024-11-12".into(),
            batch_name: "Bamboo-DC-Oct".into(),
            crop: "Bamboo".into(),
            tunnel: "SH-T2".into(),
            bed: "SB2".into(),
            row: "SR1-SR3".into(),
            cavity: "72".into(),
            plants: 1500,
            workers: 2,
            waiting_period: "28 days".into(),
            survivability: "94%".into(),
            status: Status::Active,
        },
        SecondaryHardeningRecord {
            id: "SH-2024-003".into(),
            date: "2024-11-15".into(),
            batch_name: "Teak-TG-Oct".into(),
            crop: "Teak".into(),
            tunnel: "SH-T1".into(),
            bed: "SB3".into(),
            row: "SR1-SR5".into(),
            cavity: "50".into(),
            plants: 2200,
            workers: 3,
            waiting_period: "35 days".into(),
            survivability: "92%".into(),
            status: Status::Active,
        },
        SecondaryHardeningRecord {
            id: "SH-2024-004".into(),
            date: "2024-11-18".into(),
            batch_name: "Ornamental-A-Oct".into(),
            crop: "Ornamental".into(),
            tunnel: "SH-T3".into(),
            bed: "SB1".into(),
            row: "SR1-SR4".into(),
            cavity: "40".into(),
            plants: 1800,
            workers: 3,
            waiting_period: "21 days".into(),
            survivability: "89%".into(),
            status: Status::Pending,
        },
    ]
}

pub fn mortality_events() -> Vec<MortalityRecord> {
    vec![
        MortalityRecord {
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
        },
        MortalityRecord {
            id: "MR-2024-002".into(),
            date: "2024-11-21".into(),
            batch_id: "SH-2024-001".into(),
            crop: "Bamboo".into(),
            stage: "Secondary".into(),
            initial_count: 1800,
            mortality: 54,
            mortality_rate: "3.0%".into(),
            cause: "Fungal infection".into(),
            action: "Fungicide applied".into(),
            status: Status::Completed,
        },
        MortalityRecord {
            id: "MR-2024-003".into(),
            date: "2024-11-22".into(),
            batch_id: "PH-2024-003".into(),
            crop: "Teak".into(),
            stage: "Primary".into(),
            initial_count: 2000,
            mortality: 120,
            mortality_rate: "6.0%".into(),
            cause: "Environmental stress".into(),
            action: "Monitoring closely".into(),
            status: Status::Contaminated,
        },
        MortalityRecord {
            id: "MR-2024-004".into(),
            date: "2024-11-19".into(),
            batch_id: "SH-2024-002".into(),
            crop: "Ornamental".into(),
            stage: "Secondary".into(),
            initial_count: 3000,
            mortality: 90,
            mortality_rate: "3.0%".into(),
            cause: "Normal attrition".into(),
            action: "No action needed".into(),
            status: Status::Completed,
        },
    ]
}

pub fn holding_lots() -> Vec<HoldingAreaRecord> {
    vec![
        HoldingAreaRecord {
            id: "HA-2024-001".into(),
            date: "2024-11-18".into(),
            batch_id: "SH-2024-001".into(),
            crop: "Banana".into(),
            variety: "Grand Naine".into(),
            quantity: 1950,
            location: "Zone A-1".into(),
            days_in_holding: 3,
            condition: "Excellent".into(),
            dispatch_date: "2024-11-25".into(),
            status: Status::Active,
        },
        HoldingAreaRecord {
            id: "HA-2024-002".into(),
            date: "2024-11-16".into(),
            batch_id: "SH-2024-002".into(),
            crop: "Bamboo".into(),
            variety: "Dendrocalamus".into(),
            quantity: 1450,
            location: "Zone A-2".into(),
            days_in_holding: 5,
            condition: "Good".into(),
            dispatch_date: "2024-11-23".into(),
            status: Status::Completed,
        },
        HoldingAreaRecord {
            id: "HA-2024-003".into(),
            date: "2024-11-20".into(),
            batch_id: "SH-2024-003".into(),
            crop: "Teak".into(),
            variety: "Tectona grandis".into(),
            quantity: 2040,
            location: "Zone B-1".into(),
            days_in_holding: 1,
            condition: "Excellent".into(),
            dispatch_date: "2024-11-28".into(),
            status: Status::Pending,
        },
        HoldingAreaRecord {
            id: "HA-2024-004".into(),
            date: "2024-11-19".into(),
            batch_id: "SH-2024-004".into(),
            crop: "Ornamental".into(),
            variety: "Anthurium".into(),
            quantity: 1600,
            location: "Zone B-2".into(),
            days_in_holding: 2,
            condition: "Good".into(),
            dispatch_date: "2024-11-26".into(),
            status: Status::Active,
        },
    ]
}
