//! Report execution: predicate application and result shaping.
//!
//! `run` composes the whole pipeline from a raw wire definition; `execute`
//! is the aggregation stage alone, for callers that already hold projected
//! rows. This stage trusts that the definition is valid - rejection of
//! malformed input happens once, in [`crate::validation`].

pub mod accessor;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter;
use crate::model::{
    GroupKey, MetricSpec, NumericField, PropertyRecord, RawReportDefinition, ReportDefinition,
    ReportShape,
};
use crate::projection::{self, Row};
use crate::validation::{self, DefinitionError};

/// The shaped output of one report run.
///
/// A discriminated value mirroring the definition's display type; consumers
/// branch on the variant, never on the structure of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportResult {
    List(Vec<Row>),
    Grouped(Vec<RowGroup>),
    Kpi(f64),
}

/// One group of a GROUPED_LIST result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowGroup {
    pub group: String,
    pub items: Vec<Row>,
}

/// A normalized definition paired with its result, so renderers can branch
/// on the definition's display type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRun {
    pub definition: ReportDefinition,
    pub result: ReportResult,
}

/// Validate a raw definition and execute it against a snapshot.
///
/// The snapshot is borrowed immutably and all intermediate rows are
/// allocated fresh, so concurrent runs over the same snapshot need no
/// coordination. `as_of` is the reference date for overdue checks,
/// captured once for the whole run.
pub fn run(
    properties: &[PropertyRecord],
    raw: RawReportDefinition,
    as_of: NaiveDate,
) -> Result<ReportRun, DefinitionError> {
    let definition = validation::normalize(raw)?;
    let rows = projection::project(properties, definition.entity_type);
    tracing::debug!(
        entity = definition.entity_type.as_str(),
        rows = rows.len(),
        "projected snapshot"
    );
    let result = execute(rows, &definition, as_of);
    Ok(ReportRun { definition, result })
}

/// Apply the definition's filters to the rows and shape the result.
///
/// LIST preserves input order with no implicit sort; GROUPED_LIST emits
/// groups in first-seen order, which is an observable contract (consumers
/// render groups top to bottom); KPI folds the metric descriptor to a
/// scalar.
pub fn execute(rows: Vec<Row>, definition: &ReportDefinition, as_of: NaiveDate) -> ReportResult {
    let predicate = filter::compile(&definition.filters, definition.entity_type, as_of);
    let filtered: Vec<Row> = rows.into_iter().filter(|row| predicate.matches(row)).collect();
    tracing::debug!(
        display = definition.display_type().as_str(),
        rows = filtered.len(),
        "filtered rows"
    );

    match definition.shape {
        ReportShape::List => ReportResult::List(filtered),
        ReportShape::GroupedList { group_by } => {
            ReportResult::Grouped(group_rows(filtered, group_by))
        }
        ReportShape::Kpi { metric } => ReportResult::Kpi(evaluate_metric(&filtered, metric)),
    }
}

fn group_rows(rows: Vec<Row>, key: GroupKey) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        // Key/entity combinations without a value are rejected upstream.
        let Some(value) = accessor::group_value(key, &row) else {
            continue;
        };
        match index.get(&value) {
            Some(&at) => groups[at].items.push(row),
            None => {
                index.insert(value.clone(), groups.len());
                groups.push(RowGroup {
                    group: value,
                    items: vec![row],
                });
            }
        }
    }

    groups
}

fn evaluate_metric(rows: &[Row], metric: MetricSpec) -> f64 {
    match metric {
        MetricSpec::Count => rows.len() as f64,
        MetricSpec::Sum(field) => numeric_samples(rows, field).iter().sum(),
        MetricSpec::Avg(field) => {
            let samples = numeric_samples(rows, field);
            if samples.is_empty() {
                0.0
            } else {
                samples.iter().sum::<f64>() / samples.len() as f64
            }
        }
    }
}

/// Rows without the field are excluded from the sample, not counted as zero.
fn numeric_samples(rows: &[Row], field: NumericField) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| accessor::numeric_value(field, row))
        .collect()
}
