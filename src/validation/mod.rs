//! Validation and normalization of raw report definitions.
//!
//! `normalize` is the single point where malformed input is rejected: no
//! later stage re-validates, and a definition that fails here never
//! executes against data. Unknown enum text inside a filter is a hard
//! failure, distinct from a valid filter that happens to match zero rows.

use crate::model::{
    DisplayType, EntityType, FilterSet, GroupKey, MetricSpec, NumericField, Priority,
    RawFilterSet, RawReportDefinition, Region, ReportDefinition, ReportShape, ServiceType,
    UnitStatus,
};

/// Why a raw definition was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("Unknown display type: '{0}'")]
    UnknownDisplayType(String),

    #[error("Unknown entity type: '{0}'")]
    UnknownEntityType(String),

    #[error("GROUPED_LIST report requires 'groupBy'")]
    MissingGroupBy,

    #[error("'groupBy' is only valid on GROUPED_LIST reports")]
    UnexpectedGroupBy,

    #[error("Unknown group key: '{0}'")]
    UnknownGroupKey(String),

    #[error("Group key '{key}' is not supported for entity type {entity}")]
    UnsupportedGroupKey { key: String, entity: &'static str },

    #[error("KPI report requires 'kpiMetric'")]
    MissingKpiMetric,

    #[error("'kpiMetric' is only valid on KPI reports")]
    UnexpectedKpiMetric,

    #[error("Unknown KPI metric: '{0}'")]
    UnknownMetric(String),

    #[error("{metric} metric requires 'kpiField'")]
    MissingMetricField { metric: String },

    #[error("'kpiField' is only valid on SUM and AVG metrics")]
    UnexpectedMetricField,

    #[error("Unknown numeric field: '{0}'")]
    UnknownMetricField(String),

    #[error("Numeric field '{field}' is not supported for entity type {entity}")]
    UnsupportedMetricField { field: String, entity: &'static str },

    #[error("Unknown {filter} value: '{value}'")]
    UnknownFilterValue { filter: &'static str, value: String },
}

pub type ValidationResult<T> = Result<T, DefinitionError>;

/// Check a raw definition against the recognized shape and enum values,
/// producing a typed [`ReportDefinition`] with all optional filter
/// collections defaulted to empty.
pub fn normalize(raw: RawReportDefinition) -> ValidationResult<ReportDefinition> {
    let display_type = DisplayType::parse(&raw.display_type)
        .ok_or_else(|| DefinitionError::UnknownDisplayType(raw.display_type.clone()))?;
    let entity_type = EntityType::parse(&raw.entity_type)
        .ok_or_else(|| DefinitionError::UnknownEntityType(raw.entity_type.clone()))?;

    let shape = normalize_shape(&raw, display_type, entity_type)?;
    let filters = normalize_filters(&raw.filters)?;

    Ok(ReportDefinition {
        title: raw.title,
        summary: raw.summary,
        entity_type,
        shape,
        filters,
    })
}

fn normalize_shape(
    raw: &RawReportDefinition,
    display_type: DisplayType,
    entity_type: EntityType,
) -> ValidationResult<ReportShape> {
    // The groupBy/kpiMetric fields are valid iff the display type calls
    // for them; both directions are enforced here.
    if display_type != DisplayType::GroupedList && raw.group_by.is_some() {
        return Err(DefinitionError::UnexpectedGroupBy);
    }
    if display_type != DisplayType::Kpi && (raw.kpi_metric.is_some() || raw.kpi_field.is_some()) {
        return Err(DefinitionError::UnexpectedKpiMetric);
    }

    match display_type {
        DisplayType::List => Ok(ReportShape::List),
        DisplayType::GroupedList => {
            let path = raw.group_by.as_deref().ok_or(DefinitionError::MissingGroupBy)?;
            let group_by = GroupKey::parse(path)
                .ok_or_else(|| DefinitionError::UnknownGroupKey(path.to_string()))?;
            if !group_by.supported_by(entity_type) {
                return Err(DefinitionError::UnsupportedGroupKey {
                    key: path.to_string(),
                    entity: entity_type.as_str(),
                });
            }
            Ok(ReportShape::GroupedList { group_by })
        }
        DisplayType::Kpi => {
            let kind = raw.kpi_metric.as_deref().ok_or(DefinitionError::MissingKpiMetric)?;
            let metric = normalize_metric(kind, raw.kpi_field.as_deref(), entity_type)?;
            Ok(ReportShape::Kpi { metric })
        }
    }
}

fn normalize_metric(
    kind: &str,
    field: Option<&str>,
    entity_type: EntityType,
) -> ValidationResult<MetricSpec> {
    match kind {
        "COUNT" => {
            if field.is_some() {
                return Err(DefinitionError::UnexpectedMetricField);
            }
            Ok(MetricSpec::Count)
        }
        "SUM" | "AVG" => {
            let name = field.ok_or_else(|| DefinitionError::MissingMetricField {
                metric: kind.to_string(),
            })?;
            let numeric = NumericField::parse(name)
                .ok_or_else(|| DefinitionError::UnknownMetricField(name.to_string()))?;
            if !numeric.supported_by(entity_type) {
                return Err(DefinitionError::UnsupportedMetricField {
                    field: name.to_string(),
                    entity: entity_type.as_str(),
                });
            }
            if kind == "SUM" {
                Ok(MetricSpec::Sum(numeric))
            } else {
                Ok(MetricSpec::Avg(numeric))
            }
        }
        other => Err(DefinitionError::UnknownMetric(other.to_string())),
    }
}

fn normalize_filters(raw: &RawFilterSet) -> ValidationResult<FilterSet> {
    Ok(FilterSet {
        search_text: raw
            .search_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
        service_types: parse_values(&raw.service_types, "serviceTypes", ServiceType::parse)?,
        unit_statuses: parse_values(&raw.unit_statuses, "unitStatuses", UnitStatus::parse)?,
        regions: parse_values(&raw.regions, "regions", Region::parse)?,
        rp: raw.rp.clone(),
        is_overdue: raw.is_overdue,
        priorities: parse_values(&raw.priorities, "priorities", Priority::parse)?,
    })
}

fn parse_values<T>(
    values: &[String],
    filter: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> ValidationResult<Vec<T>> {
    values
        .iter()
        .map(|value| {
            parse(value).ok_or_else(|| DefinitionError::UnknownFilterValue {
                filter,
                value: value.clone(),
            })
        })
        .collect()
}
