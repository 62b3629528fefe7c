/// Tests for the summary table view
///
/// This module tests:
/// - Sample point validation across the reference catalog
/// - Row values against the chart bundle
/// - Error row computation and undefined propagation
/// - JSON output for the table renderer


use approx::assert_relative_eq;
use taylor_catalog::Catalog;
use taylor_engine::{check_table_points, EngineConfig, RowKind, SeriesEngine};
use test_common::{function, index};

#[test]
fn test_reference_catalog_table_points_are_on_grid() {
    let config = EngineConfig::default();
    for definition in Catalog::standard().iter() {
        assert!(
            check_table_points(definition, &config).is_ok(),
            "{} has a table point off the grid",
            definition.id
        );
    }
}

#[test]
fn test_rows_match_bundle_columns() {
    let sin = function("sin_x");
    let mut engine = SeriesEngine::new();
    let bundle = engine.generate(sin, 5, 0.5).unwrap();
    let table = engine.table_view(sin, &bundle).unwrap();

    for (column, &x) in table.x.iter().enumerate() {
        let i = index(&bundle, x);
        assert_eq!(table.f.values[column], bundle.f_series[i]);
        assert_eq!(table.sum.values[column], bundle.sum_series[i]);
        for (k, row) in table.terms.iter().enumerate() {
            assert_eq!(row.kind, RowKind::Term(k));
            assert_eq!(row.values[column], bundle.term_series[k][i]);
        }
    }
}

#[test]
fn test_error_row_is_rounded_difference() {
    let exp = function("e_pow_x");
    let mut engine = SeriesEngine::new();
    let bundle = engine.generate(exp, 4, 0.0).unwrap();
    let table = engine.table_view(exp, &bundle).unwrap();

    let at_zero = table.column(0.0).unwrap();
    let at_one = table.column(1.0).unwrap();
    assert_eq!(table.error.values[at_zero], 0.0);
    assert_relative_eq!(table.error.values[at_one], 0.0099, epsilon = 1e-12);
    assert!(table.error.values.iter().all(|&e| e >= 0.0));
}

#[test]
fn test_error_row_undefined_at_pole() {
    let geometric = function("inv_one_minus_x");
    let mut engine = SeriesEngine::new();
    let bundle = engine.generate(geometric, 2, 0.0).unwrap();
    let table = engine.table_view(geometric, &bundle).unwrap();

    let pole = table.column(1.0).unwrap();
    assert!(table.f.values[pole].is_nan());
    assert!(table.error.values[pole].is_nan());
    assert_eq!(table.sum.values[pole], 3.0);
}

#[test]
fn test_table_json_uses_null_for_undefined() {
    let geometric = function("inv_one_minus_x");
    let mut engine = SeriesEngine::new();
    let bundle = engine.generate(geometric, 1, 0.0).unwrap();
    let table = engine.table_view(geometric, &bundle).unwrap();

    let json: serde_json::Value = serde_json::to_value(&table).unwrap();
    let pole = table.column(1.0).unwrap();
    assert!(json["f"]["values"][pole].is_null());
    assert_eq!(json["f"]["kind"], "function");
    assert_eq!(json["f"]["expression"], "\\frac{1}{1-x}");
    assert_eq!(json["terms"][1]["kind"]["term"], 1);
}
