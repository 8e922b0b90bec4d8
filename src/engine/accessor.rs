//! Per-entity-type field accessors.
//!
//! Grouping and numeric metrics reach into rows through these exhaustive
//! match tables instead of dynamic property lookups. An accessor returns
//! `None` only for key/entity combinations the validator rejects.

use crate::model::{GroupKey, NumericField};
use crate::projection::Row;

/// Extract the grouping value for a row.
pub fn group_value(key: GroupKey, row: &Row) -> Option<String> {
    match row {
        Row::Unit(unit) => match key {
            GroupKey::Region => Some(unit.region.as_str().to_string()),
            GroupKey::ServiceType => Some(unit.service_type.as_str().to_string()),
            GroupKey::Rp => Some(unit.rp.clone()),
            GroupKey::Status => Some(unit.status.as_str().to_string()),
            GroupKey::LegalEntity => Some(unit.legal_entity.clone()),
            GroupKey::Priority | GroupKey::Category | GroupKey::AssignedTo => None,
        },
        Row::Job(job) => match key {
            GroupKey::Region => Some(job.region.as_str().to_string()),
            GroupKey::ServiceType => Some(job.service_type.as_str().to_string()),
            GroupKey::Rp => Some(job.rp.clone()),
            GroupKey::Status => Some(job.status.as_str().to_string()),
            GroupKey::Priority => Some(job.priority.as_str().to_string()),
            GroupKey::Category => Some(job.category.clone()),
            GroupKey::AssignedTo => Some(job.assigned_to.clone()),
            GroupKey::LegalEntity => None,
        },
    }
}

/// Extract the numeric sample for a row, if the row carries one.
pub fn numeric_value(field: NumericField, row: &Row) -> Option<f64> {
    match (field, row) {
        (NumericField::Cost, Row::Job(job)) => job.cost,
        (NumericField::Cost, Row::Unit(_)) => None,
    }
}
