//! Tests for record filtering

use crate::filter::filter;
use crate::query::{Condition, Query};
use crate::test_util::{alerts, at, customers, ids, names};
use crate::timerange::DateRange;

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_empty_query_matches_everything() {
    let customers = customers();
    let matched = filter(&customers, &Query::new());
    assert_eq!(matched.len(), customers.len());
    assert_eq!(ids(&matched), vec!["c-1", "c-2", "c-3", "c-4", "c-5", "c-6"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let customers = customers();
    let matched = filter(&customers, &Query::new().with_search("al "));
    // "Glob-al Trading" matches too: it's a substring search
    assert_eq!(names(&matched), vec!["Global Trading LLC", "Al Mahtab", "AL AYAAN"]);
}

#[test]
fn test_search_matches_any_search_field() {
    let alerts = alerts();
    // "daily servers" is a plan name, "ws-" only appears in resource names
    let by_plan = filter(&alerts, &Query::new().with_search("DAILY"));
    assert_eq!(ids(&by_plan), vec!["a-1", "a-4"]);

    let by_resource = filter(&alerts, &Query::new().with_search("ws-"));
    assert_eq!(ids(&by_resource), vec!["a-2", "a-6"]);
}

#[test]
fn test_search_ignores_non_search_fields() {
    let alerts = alerts();
    // "Critical" is a severity, which isn't searchable
    assert!(filter(&alerts, &Query::new().with_search("critical")).is_empty());
}

// ============================================================================
// Conditions
// ============================================================================

#[test]
fn test_eq_condition_is_exact() {
    let alerts = alerts();
    let matched = filter(&alerts, &Query::new().with_condition(Condition::eq("severity", "Critical")));
    assert_eq!(ids(&matched), vec!["a-1", "a-3"]);
}

#[test]
fn test_eq_on_number_field_compares_by_value() {
    let customers = customers();
    for value in ["9390", "9390.0", " 9390.00"] {
        let matched = filter(&customers, &Query::new().with_condition(Condition::eq("localStorageGB", value)));
        assert_eq!(names(&matched), vec!["LAITH EMC"], "{}", value);
    }

    let matched = filter(&customers, &Query::new().with_condition(Condition::eq("localStorageGB", "lots")));
    assert!(matched.is_empty());
}

#[test]
fn test_eq_condition_is_case_sensitive() {
    let alerts = alerts();
    let matched = filter(&alerts, &Query::new().with_condition(Condition::eq("severity", "critical")));
    assert!(matched.is_empty());
}

#[test]
fn test_all_sentinel_disables_condition() {
    let alerts = alerts();
    let query = Query::new()
        .with_condition(Condition::eq("severity", "Critical"))
        .with_condition(Condition::eq("category", "all"));
    assert_eq!(filter(&alerts, &query).len(), 2);
}

#[test]
fn test_gt_condition_is_strict() {
    let customers = customers();
    let matched = filter(&customers, &Query::new().with_condition(Condition::gt("localStorageGB", 6780.0)));
    assert_eq!(names(&matched), vec!["LAITH EMC", "TechCorp Solutions"]);
}

#[test]
fn test_missing_optional_reads_as_zero() {
    let customers = customers();
    // Desert Logistics has no utilization rate, so it reads as 0
    let matched = filter(&customers, &Query::new().with_condition(Condition::gt("utilizationRate", -1.0)));
    assert_eq!(matched.len(), 6);

    let matched = filter(&customers, &Query::new().with_condition(Condition::gt("utilizationRate", 0.0)));
    assert_eq!(matched.len(), 5);
}

#[test]
fn test_non_finite_threshold_is_inactive() {
    let customers = customers();
    for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let query = Query::new().with_condition(Condition::gt("localStorageGB", threshold));
        assert_eq!(filter(&customers, &query).len(), 6);
    }
}

#[test]
fn test_unknown_field_matches_nothing() {
    let customers = customers();
    let query = Query::new().with_condition(Condition::eq("region", "EU"));
    assert!(filter(&customers, &query).is_empty());
}

#[test]
fn test_threshold_on_text_field_matches_nothing() {
    let customers = customers();
    let query = Query::new().with_condition(Condition::gt("name", 1.0));
    assert!(filter(&customers, &query).is_empty());
}

#[test]
fn test_eq_on_bool_field() {
    let customers = customers();
    let query = Query::new().with_condition(Condition::eq("enabled", "false"));
    assert_eq!(names(&filter(&customers, &query)), vec!["TechCorp Solutions"]);
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_storage_threshold_hides_disabled() {
    let customers = customers();
    let query = Query::new()
        .with_condition(Condition::gt("localStorageGB", 5000.0))
        .with_include_disabled(false);

    // TechCorp exceeds the threshold but is disabled
    assert_eq!(names(&filter(&customers, &query)), vec!["LAITH EMC", "Global Trading LLC"]);
}

#[test]
fn test_include_disabled_applies_no_exclusion() {
    let customers = customers();
    let query = Query::new()
        .with_condition(Condition::gt("localStorageGB", 5000.0))
        .with_include_disabled(true);
    assert_eq!(filter(&customers, &query).len(), 3);
}

#[test]
fn test_toggle_ignored_without_toggle_field() {
    let alerts = alerts();
    let query = Query::new().with_include_disabled(false);
    assert_eq!(filter(&alerts, &query).len(), 6);
}

// ============================================================================
// Date range
// ============================================================================

#[test]
fn test_date_range_is_inclusive() {
    let alerts = alerts();
    let query = Query::new().with_date_range(DateRange::new(at(2024, 5, 2), at(2024, 5, 4)));
    assert_eq!(ids(&filter(&alerts, &query)), vec!["a-2", "a-3", "a-4"]);
}

#[test]
fn test_open_ended_ranges() {
    let alerts = alerts();
    let since = Query::new().with_date_range(DateRange::since(at(2024, 5, 5)));
    assert_eq!(ids(&filter(&alerts, &since)), vec!["a-5", "a-6"]);

    let until = Query::new().with_date_range(DateRange::until(at(2024, 5, 1)));
    assert_eq!(ids(&filter(&alerts, &until)), vec!["a-1"]);
}

#[test]
fn test_inverted_range_matches_nothing() {
    let alerts = alerts();
    let query = Query::new().with_date_range(DateRange::new(at(2024, 5, 6), at(2024, 5, 1)));
    assert!(filter(&alerts, &query).is_empty());
}

#[test]
fn test_date_field_override() {
    let customers = customers();
    let query = Query::new()
        .with_date_range(DateRange::since(at(2024, 1, 1)))
        .with_date_field("productionStartDate");
    assert_eq!(names(&filter(&customers, &query)), vec!["Al Mahtab", "AL AYAAN", "Desert Logistics"]);
}

#[test]
fn test_date_field_override_must_be_timestamp() {
    let customers = customers();
    let query = Query::new()
        .with_date_range(DateRange::since(at(2024, 1, 1)))
        .with_date_field("name");
    assert!(filter(&customers, &query).is_empty());
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn test_adding_conditions_never_grows_matches() {
    let customers = customers();
    let steps = [
        Query::new(),
        Query::new().with_search("a"),
        Query::new().with_search("a").with_include_disabled(false),
        Query::new()
            .with_search("a")
            .with_include_disabled(false)
            .with_condition(Condition::gt("localStorageGB", 3000.0)),
        Query::new()
            .with_search("a")
            .with_include_disabled(false)
            .with_condition(Condition::gt("localStorageGB", 3000.0))
            .with_date_range(DateRange::since(at(2023, 6, 1))),
    ];

    let counts: Vec<usize> = steps.iter().map(|q| filter(&customers, q).len()).collect();
    assert!(counts.windows(2).all(|w| w[1] <= w[0]), "counts: {:?}", counts);
}

#[test]
fn test_condition_parse() {
    assert_eq!(Condition::parse("severity=Critical").unwrap(), Condition::eq("severity", "Critical"));
    assert_eq!(Condition::parse("localStorageGB>5000").unwrap(), Condition::gt("localStorageGB", 5000.0));
    assert_eq!(Condition::parse(" planName = a=b ").unwrap(), Condition::eq("planName", "a=b"));
}

#[test]
fn test_condition_parse_invalid() {
    assert!(Condition::parse("severity").is_err());
    assert!(Condition::parse("=Critical").is_err());
    assert!(Condition::parse("storage>lots").is_err());
}
