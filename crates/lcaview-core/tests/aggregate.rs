use polars::prelude::*;

use lcaview_core::aggregate::{
    cross_tab, cross_tab_top_keys, employment_breakdown_by_employer, exclude_value, frequency,
    group_mean, group_sum, remap_labels, round_column, sum_columns, top_n_by_count, top_n_by_max,
    top_n_by_mean, top_n_by_sum, with_label_column, Unmapped, CATEGORY, COUNT, EMPLOYMENT_TYPE,
    TOTAL,
};
use lcaview_core::labels::WORKSITE_STATES;
use lcaview_core::DashboardError;
use lcaview_store::schema::{
    CHANGE_EMPLOYER, CHANGE_PREVIOUS_EMPLOYMENT, CONTINUED_EMPLOYMENT, EMPLOYER_NAME,
    NEW_CONCURRENT_EMPLOYMENT, NEW_EMPLOYMENT,
};

#[test]
fn frequency_counts_per_year() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("year".into(), vec![2020i32, 2020, 2021]).into(),
        Series::new(
            "status".into(),
            vec!["Certified", "Denied", "Certified"],
        )
        .into(),
    ])?;

    let freq = frequency(&df, "year").unwrap();
    assert_eq!(freq.height(), 2);
    let years = freq.column("year")?.i32()?;
    let counts = freq.column(COUNT)?.i64()?;
    assert_eq!(years.get(0), Some(2020));
    assert_eq!(counts.get(0), Some(2));
    assert_eq!(years.get(1), Some(2021));
    assert_eq!(counts.get(1), Some(1));
    Ok(())
}

#[test]
fn cross_tab_counts_every_observed_pair() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("year".into(), vec![2020i32, 2020, 2021]).into(),
        Series::new(
            "status".into(),
            vec!["Certified", "Denied", "Certified"],
        )
        .into(),
    ])?;

    let pairs = cross_tab(&df, "year", "status").unwrap();
    assert_eq!(pairs.height(), 3);
    let counts = pairs.column(COUNT)?.i64()?;
    for idx in 0..3 {
        assert_eq!(counts.get(idx), Some(1));
    }
    Ok(())
}

#[test]
fn group_mean_excludes_nulls_from_both_sides() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("unit".into(), vec!["Year", "Year", "Hour"]).into(),
        Series::new("wage".into(), vec![Some(80000.0), None, Some(40.0)]).into(),
    ])?;

    let means = group_mean(&df, "unit", "wage").unwrap();
    assert_eq!(means.height(), 2);
    let units = means.column("unit")?.str()?;
    let wages = means.column("wage")?.f64()?;
    assert_eq!(units.get(0), Some("Year"));
    assert_eq!(wages.get(0), Some(80000.0));
    assert_eq!(units.get(1), Some("Hour"));
    assert_eq!(wages.get(1), Some(40.0));
    Ok(())
}

#[test]
fn group_mean_drops_groups_with_no_values() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("unit".into(), vec!["Year", "Week", "Week"]).into(),
        Series::new("wage".into(), vec![Some(80000.0), None, None]).into(),
    ])?;

    let means = group_mean(&df, "unit", "wage").unwrap();
    assert_eq!(means.height(), 1);
    assert_eq!(means.column("unit")?.str()?.get(0), Some("Year"));
    Ok(())
}

#[test]
fn exclusion_filter_drops_placeholder_rows() -> PolarsResult<()> {
    let df = DataFrame::new(vec![Series::new(
        "city".into(),
        vec!["No Agent", "NYC", "NYC"],
    )
    .into()])?;

    let kept = exclude_value(&df, "city", "No Agent").unwrap();
    let top = top_n_by_count(&kept, "city", 5).unwrap();

    assert_eq!(top.height(), 1);
    assert_eq!(top.column("city")?.str()?.get(0), Some("NYC"));
    assert_eq!(top.column(COUNT)?.i64()?.get(0), Some(2));
    Ok(())
}

#[test]
fn top_n_truncates_and_sorts_non_increasing() -> PolarsResult<()> {
    let df = DataFrame::new(vec![Series::new(
        "title".into(),
        vec!["a", "a", "a", "b", "b", "c", "c", "d"],
    )
    .into()])?;

    let top = top_n_by_count(&df, "title", 2).unwrap();
    assert_eq!(top.height(), 2);
    let titles = top.column("title")?.str()?;
    let counts = top.column(COUNT)?.i64()?;
    assert_eq!(titles.get(0), Some("a"));
    assert_eq!(counts.get(0), Some(3));
    // b and c tie at 2; b was encountered first.
    assert_eq!(titles.get(1), Some("b"));
    assert_eq!(counts.get(1), Some(2));
    Ok(())
}

#[test]
fn remap_preserves_rows_and_counts() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("state".into(), vec!["CA", "TX", "ZZ"]).into(),
        Series::new(COUNT.into(), vec![5i64, 3, 1]).into(),
    ])?;

    let kept = remap_labels(&df, "state", &WORKSITE_STATES, Unmapped::Keep).unwrap();
    assert_eq!(kept.height(), 3);
    let states = kept.column("state")?.str()?;
    assert_eq!(states.get(0), Some("California"));
    assert_eq!(states.get(1), Some("Texas"));
    assert_eq!(states.get(2), Some("ZZ"));
    assert_eq!(kept.column(COUNT)?.i64()?.get(0), Some(5));

    let nulled = remap_labels(&df, "state", &WORKSITE_STATES, Unmapped::Null).unwrap();
    assert_eq!(nulled.height(), 3);
    assert_eq!(nulled.column("state")?.str()?.get(2), None);
    Ok(())
}

#[test]
fn label_column_annotates_without_replacing() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("state".into(), vec!["CA", "ZZ"]).into(),
        Series::new(COUNT.into(), vec![2i64, 1]).into(),
    ])?;

    let labeled = with_label_column(&df, "state", "state_name", &WORKSITE_STATES).unwrap();
    assert_eq!(labeled.column("state")?.str()?.get(0), Some("CA"));
    assert_eq!(labeled.column("state_name")?.str()?.get(0), Some("California"));
    assert_eq!(labeled.column("state_name")?.str()?.get(1), None);
    Ok(())
}

#[test]
fn empty_input_yields_empty_tables() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("key".into(), Vec::<Option<&str>>::new()).into(),
        Series::new("value".into(), Vec::<Option<f64>>::new()).into(),
    ])?;

    assert_eq!(frequency(&df, "key").unwrap().height(), 0);
    assert_eq!(top_n_by_count(&df, "key", 5).unwrap().height(), 0);
    assert_eq!(group_sum(&df, "key", "value").unwrap().height(), 0);
    assert_eq!(group_mean(&df, "key", "value").unwrap().height(), 0);
    assert_eq!(cross_tab(&df, "key", "value").unwrap().height(), 0);
    Ok(())
}

#[test]
fn missing_column_is_reported_not_skipped() {
    let df = DataFrame::new(vec![Series::new("present".into(), vec!["x"]).into()]).unwrap();
    let err = frequency(&df, "absent").unwrap_err();
    match err {
        DashboardError::MissingColumn { column } => assert_eq!(column, "absent"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cross_tab_restricted_to_top_keys() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new(
            "court".into(),
            vec!["NY", "NY", "NY", "CA", "CA", "TX"],
        )
        .into(),
        Series::new(
            "status".into(),
            vec![
                "Certified",
                "Certified",
                "Denied",
                "Certified",
                "Denied",
                "Certified",
            ],
        )
        .into(),
    ])?;

    let pairs = cross_tab_top_keys(&df, "court", "status", 2).unwrap();
    let courts = pairs.column("court")?.str()?;
    for idx in 0..pairs.height() {
        let court = courts.get(idx).unwrap();
        assert!(court == "NY" || court == "CA", "TX leaked into top-2 set");
    }
    assert_eq!(pairs.height(), 4);
    Ok(())
}

#[test]
fn top_n_by_aggregate_orders_by_the_aggregate() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("employer".into(), vec!["a", "a", "b", "c"]).into(),
        Series::new("positions".into(), vec![Some(1i64), Some(2), Some(10), None]).into(),
    ])?;

    let top = top_n_by_sum(&df, "employer", "positions", 2).unwrap();
    assert_eq!(top.height(), 2);
    let employers = top.column("employer")?.str()?;
    let positions = top.column("positions")?.i64()?;
    assert_eq!(employers.get(0), Some("b"));
    assert_eq!(positions.get(0), Some(10));
    assert_eq!(employers.get(1), Some("a"));
    assert_eq!(positions.get(1), Some(3));

    let means = top_n_by_mean(&df, "employer", "positions", 5).unwrap();
    // c has no non-null positions and disappears.
    assert_eq!(means.height(), 2);
    Ok(())
}

#[test]
fn group_max_over_two_keys() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new("title".into(), vec!["Eng", "Eng", "Eng", "QA"]).into(),
        Series::new("unit".into(), vec!["Year", "Year", "Hour", "Year"]).into(),
        Series::new(
            "wage".into(),
            vec![Some(90000.0), Some(120000.0), Some(60.0), Some(70000.0)],
        )
        .into(),
    ])?;

    let top = top_n_by_max(&df, &["title", "unit"], "wage", 10).unwrap();
    assert_eq!(top.height(), 3);
    let wages = top.column("wage")?.f64()?;
    assert_eq!(wages.get(0), Some(120000.0));
    assert_eq!(wages.get(1), Some(70000.0));
    assert_eq!(wages.get(2), Some(60.0));
    Ok(())
}

#[test]
fn counters_are_summed_never_averaged() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new(NEW_EMPLOYMENT.into(), vec![Some(2i64), Some(1), None]).into(),
        Series::new(CONTINUED_EMPLOYMENT.into(), vec![Some(1i64), Some(0), Some(1)]).into(),
    ])?;

    let totals = sum_columns(
        &df,
        &[
            (NEW_EMPLOYMENT, "New Employment"),
            (CONTINUED_EMPLOYMENT, "Continued Employment"),
        ],
    )
    .unwrap();

    assert_eq!(totals.height(), 2);
    let categories = totals.column(CATEGORY)?.str()?;
    let sums = totals.column(TOTAL)?.i64()?;
    assert_eq!(categories.get(0), Some("New Employment"));
    assert_eq!(sums.get(0), Some(3));
    assert_eq!(categories.get(1), Some("Continued Employment"));
    assert_eq!(sums.get(1), Some(2));
    Ok(())
}

#[test]
fn employer_breakdown_is_long_format_over_top_employers() -> PolarsResult<()> {
    let df = DataFrame::new(vec![
        Series::new(EMPLOYER_NAME.into(), vec!["Acme", "Acme", "Globex"]).into(),
        Series::new(NEW_EMPLOYMENT.into(), vec![3i64, 2, 1]).into(),
        Series::new(CONTINUED_EMPLOYMENT.into(), vec![1i64, 0, 4]).into(),
        Series::new(CHANGE_PREVIOUS_EMPLOYMENT.into(), vec![0i64, 0, 0]).into(),
        Series::new(NEW_CONCURRENT_EMPLOYMENT.into(), vec![0i64, 0, 0]).into(),
        Series::new(CHANGE_EMPLOYER.into(), vec![0i64, 1, 0]).into(),
    ])?;

    let breakdown = employment_breakdown_by_employer(&df, 1).unwrap();
    // One employer, five employment types.
    assert_eq!(breakdown.height(), 5);
    let employers = breakdown.column(EMPLOYER_NAME)?.str()?;
    let types = breakdown.column(EMPLOYMENT_TYPE)?.str()?;
    let totals = breakdown.column(TOTAL)?.i64()?;
    assert_eq!(employers.get(0), Some("Acme"));
    assert_eq!(types.get(0), Some("New Employment"));
    assert_eq!(totals.get(0), Some(5));
    assert_eq!(types.get(1), Some("Continued Employment"));
    assert_eq!(totals.get(1), Some(1));
    Ok(())
}

#[test]
fn round_column_rounds_for_display() -> PolarsResult<()> {
    let df = DataFrame::new(vec![Series::new(
        "wage".into(),
        vec![Some(86685.666), None],
    )
    .into()])?;

    let rounded = round_column(&df, "wage", 2).unwrap();
    let wages = rounded.column("wage")?.f64()?;
    assert_eq!(wages.get(0), Some(86685.67));
    assert_eq!(wages.get(1), None);
    Ok(())
}
