//! Projection of the nested property graph into flat report rows.
//!
//! Each property contributes one row per unit or maintenance job it owns,
//! with selected parent fields merged on so that row-level and
//! property-level filters share a single namespace. Rows are recomputed on
//! every report run and never persisted; `property_id` is a lookup key for
//! navigation, not a live reference to the parent.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{
    EntityType, JobStatus, Priority, PropertyRecord, Region, ServiceType, UnitStatus,
};

/// A unit merged with its parent property's fields.
///
/// All string fields are total: optional source fields project to `""`,
/// so downstream stages need no null checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRow {
    pub property_id: String,
    pub unit_id: String,
    pub unit_name: String,
    pub full_address: String,
    pub rp: String,
    pub legal_entity: String,
    pub service_type: ServiceType,
    pub status: UnitStatus,
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handover_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handback_date: Option<NaiveDate>,
    pub attention: String,
}

/// A maintenance job merged with its parent property's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceJobRow {
    pub property_id: String,
    pub reference: String,
    pub category: String,
    pub priority: Priority,
    pub status: JobStatus,
    pub sla_due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raised_date: Option<NaiveDate>,
    pub assigned_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub region: Region,
    pub service_type: ServiceType,
    pub rp: String,
}

impl MaintenanceJobRow {
    /// Whether the job has blown its SLA as of the given date.
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.sla_due_date < as_of && !self.status.is_terminal()
    }
}

/// The uniform row currency of the predicate engine and aggregation stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Unit(UnitRow),
    Job(MaintenanceJobRow),
}

impl Row {
    pub fn property_id(&self) -> &str {
        match self {
            Row::Unit(unit) => &unit.property_id,
            Row::Job(job) => &job.property_id,
        }
    }
}

/// Flatten every unit in the snapshot, in property order.
pub fn project_units(properties: &[PropertyRecord]) -> Vec<UnitRow> {
    properties
        .iter()
        .flat_map(|property| {
            property.units.iter().map(move |unit| UnitRow {
                property_id: property.id.clone(),
                unit_id: unit.id.clone(),
                unit_name: unit.name.clone(),
                full_address: unit.full_address.clone(),
                rp: property.tags.rp.clone(),
                legal_entity: property.legal_entity.clone(),
                service_type: property.service_type,
                status: unit.status,
                region: property.region,
                handover_date: unit.handover_date,
                handback_date: unit.handback_date,
                attention: unit.attention.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Flatten every maintenance job in the snapshot, in property order.
pub fn project_maintenance_jobs(properties: &[PropertyRecord]) -> Vec<MaintenanceJobRow> {
    properties
        .iter()
        .flat_map(|property| {
            property
                .maintenance_jobs
                .iter()
                .map(move |job| MaintenanceJobRow {
                    property_id: property.id.clone(),
                    reference: job.reference.clone(),
                    category: job.category.clone(),
                    priority: job.priority,
                    status: job.status,
                    sla_due_date: job.sla_due_date,
                    raised_date: job.raised_date,
                    assigned_to: job.assigned_to.clone(),
                    cost: job.cost,
                    region: property.region,
                    service_type: property.service_type,
                    rp: property.tags.rp.clone(),
                })
        })
        .collect()
}

/// Project the row collection for the given entity type.
pub fn project(properties: &[PropertyRecord], entity: EntityType) -> Vec<Row> {
    match entity {
        EntityType::Units => project_units(properties).into_iter().map(Row::Unit).collect(),
        EntityType::MaintenanceJobs => project_maintenance_jobs(properties)
            .into_iter()
            .map(Row::Job)
            .collect(),
    }
}
