// src/model/report.rs
use serde::{Deserialize, Serialize};

use crate::model::property::{Priority, Region, ServiceType, UnitStatus};

/// A report definition as received from the natural-language translator.
///
/// This is the literal wire contract: the translator must emit exactly this
/// JSON shape. Enum-valued fields arrive as plain strings and are checked
/// by [`crate::validation::normalize`], which is the single point where
/// malformed definitions are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReportDefinition {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub display_type: String,
    pub entity_type: String,
    #[serde(default)]
    pub filters: RawFilterSet,
    /// Field path to group by (GROUPED_LIST only), e.g. "region" or "tags.rp"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    /// Metric kind (KPI only): COUNT, SUM or AVG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi_metric: Option<String>,
    /// Numeric field for SUM/AVG metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi_field: Option<String>,
}

/// Unvalidated filters. Absent arrays and absent booleans never constrain
/// the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(default)]
    pub service_types: Vec<String>,
    #[serde(default)]
    pub unit_statuses: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub rp: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_overdue: Option<bool>,
    #[serde(default)]
    pub priorities: Vec<String>,
}

/// Shape of the final result: flat list, grouped list, or scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayType {
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "GROUPED_LIST")]
    GroupedList,
    #[serde(rename = "KPI")]
    Kpi,
}

impl DisplayType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LIST" => Some(DisplayType::List),
            "GROUPED_LIST" => Some(DisplayType::GroupedList),
            "KPI" => Some(DisplayType::Kpi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::List => "LIST",
            DisplayType::GroupedList => "GROUPED_LIST",
            DisplayType::Kpi => "KPI",
        }
    }
}

/// Which projected row collection a report runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "UNITS")]
    Units,
    #[serde(rename = "MAINTENANCE_JOBS")]
    MaintenanceJobs,
}

impl EntityType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UNITS" => Some(EntityType::Units),
            "MAINTENANCE_JOBS" => Some(EntityType::MaintenanceJobs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Units => "UNITS",
            EntityType::MaintenanceJobs => "MAINTENANCE_JOBS",
        }
    }
}

/// A validated report definition.
///
/// Only [`crate::validation::normalize`] constructs these from wire input.
/// The display shape is carried as [`ReportShape`], so a grouped report
/// without a group key (or a KPI report without a metric) is not
/// representable after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    pub title: String,
    pub summary: String,
    pub entity_type: EntityType,
    #[serde(flatten)]
    pub shape: ReportShape,
    #[serde(default)]
    pub filters: FilterSet,
}

impl ReportDefinition {
    pub fn display_type(&self) -> DisplayType {
        self.shape.display_type()
    }
}

/// Display shape plus the data each shape requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "displayType")]
pub enum ReportShape {
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "GROUPED_LIST", rename_all = "camelCase")]
    GroupedList { group_by: GroupKey },
    #[serde(rename = "KPI")]
    Kpi { metric: MetricSpec },
}

impl ReportShape {
    pub fn display_type(&self) -> DisplayType {
        match self {
            ReportShape::List => DisplayType::List,
            ReportShape::GroupedList { .. } => DisplayType::GroupedList,
            ReportShape::Kpi { .. } => DisplayType::Kpi,
        }
    }
}

/// Validated filters. Every collection is present (possibly empty), so the
/// predicate engine never sees an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
    #[serde(default)]
    pub unit_statuses: Vec<UnitStatus>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub rp: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_overdue: Option<bool>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

/// A supported grouping field path.
///
/// `Rp` is the one dotted path (`tags.rp`): it reads the registered
/// provider merged onto each row from the parent property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    #[serde(rename = "region")]
    Region,
    #[serde(rename = "serviceType")]
    ServiceType,
    #[serde(rename = "tags.rp")]
    Rp,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "legalEntity")]
    LegalEntity,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "assignedTo")]
    AssignedTo,
}

impl GroupKey {
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "region" => Some(GroupKey::Region),
            "serviceType" => Some(GroupKey::ServiceType),
            "tags.rp" => Some(GroupKey::Rp),
            "status" => Some(GroupKey::Status),
            "legalEntity" => Some(GroupKey::LegalEntity),
            "priority" => Some(GroupKey::Priority),
            "category" => Some(GroupKey::Category),
            "assignedTo" => Some(GroupKey::AssignedTo),
            _ => None,
        }
    }

    /// Whether the key has a value on rows of the given entity type.
    pub fn supported_by(&self, entity: EntityType) -> bool {
        match entity {
            EntityType::Units => matches!(
                self,
                GroupKey::Region
                    | GroupKey::ServiceType
                    | GroupKey::Rp
                    | GroupKey::Status
                    | GroupKey::LegalEntity
            ),
            EntityType::MaintenanceJobs => !matches!(self, GroupKey::LegalEntity),
        }
    }
}

/// A KPI metric descriptor.
///
/// COUNT is the metric the dashboard ships with; SUM and AVG fold a named
/// numeric field, so new scalar metrics extend this enum rather than the
/// `execute` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field")]
pub enum MetricSpec {
    #[serde(rename = "COUNT")]
    Count,
    #[serde(rename = "SUM")]
    Sum(NumericField),
    #[serde(rename = "AVG")]
    Avg(NumericField),
}

/// A numeric field usable by SUM/AVG metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    #[serde(rename = "cost")]
    Cost,
}

impl NumericField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cost" => Some(NumericField::Cost),
            _ => None,
        }
    }

    pub fn supported_by(&self, entity: EntityType) -> bool {
        match self {
            NumericField::Cost => matches!(entity, EntityType::MaintenanceJobs),
        }
    }
}
