// src/model/property.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A property in the managed portfolio, with its nested units and jobs.
///
/// Supplied by the application's data layer as a read-only snapshot;
/// the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub region: Region,
    pub service_type: ServiceType,
    #[serde(default)]
    pub tags: PropertyTags,
    #[serde(default)]
    pub legal_entity: String,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub maintenance_jobs: Vec<MaintenanceJob>,
}

/// Stakeholder tags on a property. All open strings - provider names
/// are data, not schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTags {
    /// Registered provider
    #[serde(default)]
    pub rp: String,
    /// Local authority
    #[serde(default)]
    pub la: String,
    #[serde(default)]
    pub support_provider: String,
}

/// A single unit (dwelling) within a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub full_address: String,
    pub status: UnitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handback_date: Option<NaiveDate>,
    /// Free-text flag raised by housing officers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention: Option<String>,
}

/// A maintenance job raised against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceJob {
    pub reference: String,
    #[serde(default)]
    pub category: String,
    pub priority: Priority,
    pub status: JobStatus,
    pub sla_due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raised_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: String,
    /// Estimated cost in GBP, where known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Operating region of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
    London,
}

impl Region {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            "East" => Some(Region::East),
            "West" => Some(Region::West),
            "Central" => Some(Region::Central),
            "London" => Some(Region::London),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
            Region::London => "London",
        }
    }
}

/// Service model a property is operated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Supported Living")]
    SupportedLiving,
    #[serde(rename = "Residential Care")]
    ResidentialCare,
    #[serde(rename = "Temporary Accommodation")]
    TemporaryAccommodation,
    #[serde(rename = "General Needs")]
    GeneralNeeds,
}

impl ServiceType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Supported Living" => Some(ServiceType::SupportedLiving),
            "Residential Care" => Some(ServiceType::ResidentialCare),
            "Temporary Accommodation" => Some(ServiceType::TemporaryAccommodation),
            "General Needs" => Some(ServiceType::GeneralNeeds),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::SupportedLiving => "Supported Living",
            ServiceType::ResidentialCare => "Residential Care",
            ServiceType::TemporaryAccommodation => "Temporary Accommodation",
            ServiceType::GeneralNeeds => "General Needs",
        }
    }
}

/// Occupancy status of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    Occupied,
    Void,
    Maintenance,
    Handback,
}

impl UnitStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Occupied" => Some(UnitStatus::Occupied),
            "Void" => Some(UnitStatus::Void),
            "Maintenance" => Some(UnitStatus::Maintenance),
            "Handback" => Some(UnitStatus::Handback),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Occupied => "Occupied",
            UnitStatus::Void => "Void",
            UnitStatus::Maintenance => "Maintenance",
            UnitStatus::Handback => "Handback",
        }
    }
}

/// Priority of a maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            "Urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

/// Workflow status of a maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Closed,
}

impl JobStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Open" => Some(JobStatus::Open),
            "In Progress" => Some(JobStatus::InProgress),
            "On Hold" => Some(JobStatus::OnHold),
            "Completed" => Some(JobStatus::Completed),
            "Closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::InProgress => "In Progress",
            JobStatus::OnHold => "On Hold",
            JobStatus::Completed => "Completed",
            JobStatus::Closed => "Closed",
        }
    }

    /// Terminal statuses are never counted as overdue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Closed)
    }
}
