use airfoil_lift_calculator::coefficients::{
    AoaCondition, BUILTIN_STATIONS, CoefficientTable, LOADED_STATIONS, Surface, TableError,
    builtin_10deg,
};

/// Build a syntactically valid all-angles CSV with the given number of data
/// rows, decimal commas and semicolon separators included.
fn synthetic_table(rows: usize) -> String {
    let mut out =
        String::from("x/c;Cp_upper_10deg;Cp_upper_5deg;Cp_upper_0deg;Cp_lower_0deg;Cp_lower_5deg;Cp_lower_10deg\n");
    for i in 0..rows {
        out.push_str(&format!(
            "0,{i:04};-1,{i:04};-0,8{i:03};-0,4{i:03};0,1{i:03};0,2{i:03};0,3{i:03}\n"
        ));
    }
    out
}

#[test]
fn builtin_tables_cover_81_stations() {
    let table = builtin_10deg();
    assert_eq!(table.station_count(), BUILTIN_STATIONS);
    // Leading-edge suction peak on the upper surface, stagnation-side
    // positive pressure on the lower surface.
    assert!(table.coefficient(0, Surface::Upper) < -2.0);
    assert!(table.coefficient(0, Surface::Lower) > 0.8);
    assert_eq!(table.fixed_coefficients(Surface::Upper).len(), BUILTIN_STATIONS);
}

#[test]
fn shipped_table_loads_with_the_fixed_shape() {
    let table = CoefficientTable::from_path("data/naca2412_cp_all_angles.csv").unwrap();
    assert_eq!(table.station_count(), LOADED_STATIONS);
}

#[test]
fn shipped_table_matches_builtin_at_10_degrees() {
    let loaded = CoefficientTable::from_path("data/naca2412_cp_all_angles.csv").unwrap();
    let builtin = builtin_10deg();

    for station in 0..builtin.station_count() {
        for side in [Surface::Upper, Surface::Lower] {
            let from_file = loaded.coefficient(station, side, AoaCondition::Deg10);
            let compiled = builtin.coefficient(station, side);
            assert!(
                (from_file - compiled).abs() < 1e-3,
                "station {station} {side:?}: loaded {from_file} vs builtin {compiled}"
            );
        }
    }
}

#[test]
fn empirical_coefficient_has_three_samples_in_condition_order() {
    let table = CoefficientTable::from_path("data/naca2412_cp_all_angles.csv").unwrap();

    let scalar = table.empirical_coefficient(0, Surface::Upper).unwrap();
    let samples = scalar.samples().expect("empirical scalar");
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], table.coefficient(0, Surface::Upper, AoaCondition::Deg10));
    assert_eq!(samples[1], table.coefficient(0, Surface::Upper, AoaCondition::Deg5));
    assert_eq!(samples[2], table.coefficient(0, Surface::Upper, AoaCondition::Deg0));
}

#[test]
fn short_row_aborts_the_load() {
    let mut csv = synthetic_table(LOADED_STATIONS);
    // Truncate one mid-table row to 4 fields.
    let mut lines: Vec<&str> = csv.lines().collect();
    let truncated = "0,5000;-1,5000;-0,8000;-0,4000";
    lines[60] = truncated;
    csv = lines.join("\n");

    let err = CoefficientTable::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        TableError::MalformedRow { row, fields } => {
            assert_eq!(row, 61);
            assert_eq!(fields, 4);
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn non_numeric_field_aborts_the_load() {
    let mut csv = synthetic_table(LOADED_STATIONS);
    csv = csv.replacen("-0,8000", "n/a", 1);
    let err = CoefficientTable::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::NonNumericField { .. }), "got {err:?}");
}

#[test]
fn wrong_row_count_aborts_the_load() {
    let err = CoefficientTable::from_reader(synthetic_table(10).as_bytes()).unwrap_err();
    match err {
        TableError::RowCount { expected, found } => {
            assert_eq!(expected, LOADED_STATIONS);
            assert_eq!(found, 10);
        }
        other => panic!("expected RowCount, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CoefficientTable::from_path("data/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
}

#[test]
fn decimal_commas_parse_as_decimal_points() {
    let table = CoefficientTable::from_reader(synthetic_table(LOADED_STATIONS).as_bytes()).unwrap();
    // Row 0: upper-10 column is "-1,0000".
    assert_eq!(table.coefficient(0, Surface::Upper, AoaCondition::Deg10), -1.0);
    assert_eq!(table.coefficient(0, Surface::Lower, AoaCondition::Deg10), 0.3);
}
