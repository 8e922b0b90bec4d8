use gable::model::{
    DisplayType, EntityType, GroupKey, MetricSpec, NumericField, RawReportDefinition,
};

#[test]
fn test_full_wire_definition_deserializes() {
    let json = r#"{
        "title": "Overdue high priority jobs",
        "summary": "High priority maintenance jobs past their SLA",
        "displayType": "KPI",
        "entityType": "MAINTENANCE_JOBS",
        "filters": {
            "priorities": ["High", "Urgent"],
            "isOverdue": true
        },
        "kpiMetric": "COUNT"
    }"#;

    let raw: RawReportDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(raw.display_type, "KPI");
    assert_eq!(raw.entity_type, "MAINTENANCE_JOBS");
    assert_eq!(raw.kpi_metric.as_deref(), Some("COUNT"));
    assert!(raw.kpi_field.is_none());
    assert_eq!(raw.filters.priorities, vec!["High", "Urgent"]);
    assert_eq!(raw.filters.is_overdue, Some(true));
    assert!(raw.filters.search_text.is_none());
}

#[test]
fn test_minimal_wire_definition_defaults_filters() {
    let json = r#"{"displayType": "LIST", "entityType": "UNITS"}"#;

    let raw: RawReportDefinition = serde_json::from_str(json).unwrap();
    assert!(raw.title.is_empty());
    assert!(raw.filters.service_types.is_empty());
    assert!(raw.filters.unit_statuses.is_empty());
    assert!(raw.filters.regions.is_empty());
    assert!(raw.filters.rp.is_empty());
    assert!(raw.filters.priorities.is_empty());
    assert!(raw.filters.is_overdue.is_none());
}

#[test]
fn test_display_type_parse() {
    assert_eq!(DisplayType::parse("LIST"), Some(DisplayType::List));
    assert_eq!(DisplayType::parse("GROUPED_LIST"), Some(DisplayType::GroupedList));
    assert_eq!(DisplayType::parse("KPI"), Some(DisplayType::Kpi));
    assert_eq!(DisplayType::parse("list"), None);
    assert_eq!(DisplayType::parse("TABLE"), None);
}

#[test]
fn test_entity_type_parse() {
    assert_eq!(EntityType::parse("UNITS"), Some(EntityType::Units));
    assert_eq!(
        EntityType::parse("MAINTENANCE_JOBS"),
        Some(EntityType::MaintenanceJobs)
    );
    assert_eq!(EntityType::parse("PROPERTIES"), None);
}

#[test]
fn test_group_key_parse_includes_dotted_path() {
    assert_eq!(GroupKey::parse("tags.rp"), Some(GroupKey::Rp));
    assert_eq!(GroupKey::parse("region"), Some(GroupKey::Region));
    assert_eq!(GroupKey::parse("serviceType"), Some(GroupKey::ServiceType));
    assert_eq!(GroupKey::parse("assignedTo"), Some(GroupKey::AssignedTo));
    assert_eq!(GroupKey::parse("rp"), None);
    assert_eq!(GroupKey::parse("tags.la"), None);
}

#[test]
fn test_group_key_entity_support_table() {
    // Units group on property-level and unit-level fields
    assert!(GroupKey::Region.supported_by(EntityType::Units));
    assert!(GroupKey::Rp.supported_by(EntityType::Units));
    assert!(GroupKey::Status.supported_by(EntityType::Units));
    assert!(GroupKey::LegalEntity.supported_by(EntityType::Units));
    assert!(!GroupKey::Priority.supported_by(EntityType::Units));
    assert!(!GroupKey::Category.supported_by(EntityType::Units));

    // Jobs group on everything except legalEntity
    assert!(GroupKey::Priority.supported_by(EntityType::MaintenanceJobs));
    assert!(GroupKey::AssignedTo.supported_by(EntityType::MaintenanceJobs));
    assert!(GroupKey::Rp.supported_by(EntityType::MaintenanceJobs));
    assert!(!GroupKey::LegalEntity.supported_by(EntityType::MaintenanceJobs));
}

#[test]
fn test_numeric_field_support_table() {
    assert!(NumericField::Cost.supported_by(EntityType::MaintenanceJobs));
    assert!(!NumericField::Cost.supported_by(EntityType::Units));
    assert_eq!(NumericField::parse("cost"), Some(NumericField::Cost));
    assert_eq!(NumericField::parse("price"), None);
}

#[test]
fn test_metric_spec_serde_shape() {
    let count = serde_json::to_value(MetricSpec::Count).unwrap();
    assert_eq!(count["kind"], "COUNT");

    let sum = serde_json::to_value(MetricSpec::Sum(NumericField::Cost)).unwrap();
    assert_eq!(sum["kind"], "SUM");
    assert_eq!(sum["field"], "cost");

    let back: MetricSpec = serde_json::from_value(sum).unwrap();
    assert_eq!(back, MetricSpec::Sum(NumericField::Cost));
}
