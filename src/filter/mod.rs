//! Compilation of filter sets into row predicates.
//!
//! A compiled predicate is a conjunction (AND) of independent clauses, one
//! per filter field; a clause whose filter is empty is a no-op. OR
//! semantics exist only *within* a list-valued field, as set membership.
//! Filters that do not apply to the report's entity type (unit statuses on
//! a jobs report, priorities or overdue on a units report) compile away to
//! no-ops rather than erroring.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{EntityType, FilterSet, Priority, Region, ServiceType, UnitStatus};
use crate::projection::{MaintenanceJobRow, Row, UnitRow};

/// A filter set compiled for one report run.
///
/// Set-valued clauses are materialized as hash sets once, here, not per
/// row. `as_of` is captured at compile time so every overdue check in a
/// single run sees the same date.
#[derive(Debug, Clone)]
pub struct RowPredicate {
    search_text: Option<String>,
    service_types: HashSet<ServiceType>,
    unit_statuses: HashSet<UnitStatus>,
    regions: HashSet<Region>,
    rp: HashSet<String>,
    is_overdue: Option<bool>,
    priorities: HashSet<Priority>,
    as_of: NaiveDate,
}

/// Compile a normalized filter set into a predicate over projected rows.
pub fn compile(filters: &FilterSet, entity_type: EntityType, as_of: NaiveDate) -> RowPredicate {
    let units = entity_type == EntityType::Units;
    RowPredicate {
        search_text: filters
            .search_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase),
        service_types: filters.service_types.iter().copied().collect(),
        unit_statuses: if units {
            filters.unit_statuses.iter().copied().collect()
        } else {
            HashSet::new()
        },
        regions: filters.regions.iter().copied().collect(),
        rp: filters.rp.iter().cloned().collect(),
        is_overdue: if units { None } else { filters.is_overdue },
        priorities: if units {
            HashSet::new()
        } else {
            filters.priorities.iter().copied().collect()
        },
        as_of,
    }
}

impl RowPredicate {
    pub fn matches(&self, row: &Row) -> bool {
        match row {
            Row::Unit(unit) => self.matches_unit(unit),
            Row::Job(job) => self.matches_job(job),
        }
    }

    fn matches_unit(&self, row: &UnitRow) -> bool {
        in_set(&self.unit_statuses, &row.status)
            && in_set(&self.regions, &row.region)
            && in_set(&self.service_types, &row.service_type)
            && in_set(&self.rp, &row.rp)
            && self.matches_search(&[
                row.unit_name.as_str(),
                row.full_address.as_str(),
                row.legal_entity.as_str(),
                row.rp.as_str(),
            ])
    }

    fn matches_job(&self, row: &MaintenanceJobRow) -> bool {
        in_set(&self.regions, &row.region)
            && in_set(&self.service_types, &row.service_type)
            && in_set(&self.rp, &row.rp)
            && in_set(&self.priorities, &row.priority)
            && self
                .is_overdue
                .map_or(true, |wanted| row.is_overdue(self.as_of) == wanted)
            && self.matches_search(&[
                row.reference.as_str(),
                row.category.as_str(),
                row.assigned_to.as_str(),
                row.rp.as_str(),
            ])
    }

    fn matches_search(&self, haystacks: &[&str]) -> bool {
        match &self.search_text {
            None => true,
            Some(needle) => haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(needle)),
        }
    }
}

/// Empty set means the clause is a no-op.
fn in_set<T: std::hash::Hash + Eq>(set: &HashSet<T>, value: &T) -> bool {
    set.is_empty() || set.contains(value)
}
