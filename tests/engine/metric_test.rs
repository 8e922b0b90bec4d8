use chrono::NaiveDate;
use gable::engine::{run, ReportResult};
use gable::model::{
    JobStatus, MaintenanceJob, Priority, PropertyRecord, PropertyTags, RawFilterSet,
    RawReportDefinition, Region, ServiceType,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn as_of() -> NaiveDate {
    date(2026, 8, 6)
}

fn costed_job(reference: &str, cost: Option<f64>) -> MaintenanceJob {
    MaintenanceJob {
        reference: reference.to_string(),
        category: "Roofing".to_string(),
        priority: Priority::Medium,
        status: JobStatus::Open,
        sla_due_date: date(2026, 9, 1),
        raised_date: None,
        assigned_to: String::new(),
        cost,
    }
}

fn portfolio() -> Vec<PropertyRecord> {
    vec![PropertyRecord {
        id: "p1".to_string(),
        region: Region::East,
        service_type: ServiceType::GeneralNeeds,
        tags: PropertyTags::default(),
        legal_entity: String::new(),
        units: Vec::new(),
        maintenance_jobs: vec![
            costed_job("MJ-1", Some(100.0)),
            costed_job("MJ-2", Some(300.0)),
            costed_job("MJ-3", None),
        ],
    }]
}

fn kpi(metric: &str, field: Option<&str>) -> RawReportDefinition {
    RawReportDefinition {
        title: String::new(),
        summary: String::new(),
        display_type: "KPI".to_string(),
        entity_type: "MAINTENANCE_JOBS".to_string(),
        filters: RawFilterSet::default(),
        group_by: None,
        kpi_metric: Some(metric.to_string()),
        kpi_field: field.map(|f| f.to_string()),
    }
}

fn scalar(result: ReportResult) -> f64 {
    match result {
        ReportResult::Kpi(value) => value,
        other => panic!("expected a KPI result, got {:?}", other),
    }
}

#[test]
fn test_count_counts_all_filtered_rows() {
    let report = run(&portfolio(), kpi("COUNT", None), as_of()).unwrap();
    assert_eq!(scalar(report.result), 3.0);
}

#[test]
fn test_sum_folds_present_costs() {
    let report = run(&portfolio(), kpi("SUM", Some("cost")), as_of()).unwrap();
    assert_eq!(scalar(report.result), 400.0);
}

#[test]
fn test_avg_excludes_missing_costs_from_denominator() {
    // MJ-3 has no cost: avg is 400 / 2, not 400 / 3
    let report = run(&portfolio(), kpi("AVG", Some("cost")), as_of()).unwrap();
    assert_eq!(scalar(report.result), 200.0);
}

#[test]
fn test_sum_over_zero_rows_is_zero() {
    let mut input = kpi("SUM", Some("cost"));
    input.filters.priorities = vec!["Urgent".to_string()];

    let report = run(&portfolio(), input, as_of()).unwrap();
    assert_eq!(scalar(report.result), 0.0);
}

#[test]
fn test_avg_over_zero_samples_is_zero() {
    let mut input = kpi("AVG", Some("cost"));
    input.filters.priorities = vec!["Urgent".to_string()];

    let report = run(&portfolio(), input, as_of()).unwrap();
    assert_eq!(scalar(report.result), 0.0);
}

#[test]
fn test_metric_respects_filters() {
    let mut input = kpi("COUNT", None);
    input.filters.regions = vec!["West".to_string()];

    let report = run(&portfolio(), input, as_of()).unwrap();
    assert_eq!(scalar(report.result), 0.0);
}
