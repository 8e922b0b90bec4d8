//! Domain snapshot records and report definition types.

pub mod property;
pub mod report;

pub use property::{
    JobStatus, MaintenanceJob, Priority, PropertyRecord, PropertyTags, Region, ServiceType, Unit,
    UnitStatus,
};
pub use report::{
    DisplayType, EntityType, FilterSet, GroupKey, MetricSpec, NumericField, RawFilterSet,
    RawReportDefinition, ReportDefinition, ReportShape,
};
