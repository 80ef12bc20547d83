//! Serialized tables read back to the values that were written

mod common;

use common::*;
use proptest::prelude::*;
use tempfile::TempDir;
use weighted_core::{random_matrix, Matrix};
use weighted_table::{
    parse_delimited, read_table, serialize_delimited, to_delimited_string, write_table, Table,
    TableConfig,
};

const HEADERS: [&str; 4] = ["temperature", "rainfall", "humidity", "yield_apple"];

proptest! {
    #[test]
    fn prop_round_trip_within_precision(
        rows in prop::collection::vec(prop::array::uniform4(-1.0e4f64..1.0e4), 1..20),
        precision in 0usize..7,
    ) {
        let matrix = Matrix::from_rows(&rows).unwrap();
        let text = serialize_delimited(&matrix, &HEADERS, precision).unwrap();
        let parsed = parse_delimited(&text, &TableConfig::default()).unwrap();

        prop_assert_eq!(parsed.headers(), &HEADERS);
        prop_assert_eq!(parsed.data().shape(), matrix.shape());

        let tolerance = 0.5 * 10f64.powi(-(precision as i32)) + 1e-9;
        for (written, read) in matrix.as_slice().iter().zip(parsed.data().as_slice()) {
            prop_assert!(
                (written - read).abs() <= tolerance,
                "{} read back as {} at precision {}", written, read, precision
            );
        }
    }

    #[test]
    fn prop_reserialize_is_stable(
        rows in prop::collection::vec(prop::array::uniform4(-1.0e4f64..1.0e4), 1..10),
        precision in 0usize..5,
    ) {
        let config = TableConfig::default().with_precision(precision);
        let table = Table::new(HEADERS, Matrix::from_rows(&rows).unwrap()).unwrap();

        let first = to_delimited_string(&table, &config).unwrap();
        let second = to_delimited_string(&parse_delimited(&first, &config).unwrap(), &config).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("climate.csv");
    let config = TableConfig::default().with_precision(6);

    let data = random_matrix(50, 4, 7).unwrap();
    let table = Table::new(HEADERS, data.clone()).unwrap();
    write_table(&path, &table, &config).unwrap();

    let read = read_table(&path, &config).unwrap();
    assert_eq!(read.headers(), table.headers());
    for (written, read) in data.as_slice().iter().zip(read.data().as_slice()) {
        assert_relative_eq!(*written, *read, epsilon = 1e-6);
    }
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "out.csv", "stale contents that are much longer than the table\n");

    let table = parse_delimited("a,b\n1,2\n", &TableConfig::default()).unwrap();
    write_table(&path, &table, &TableConfig::default()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1.00,2.00\n");
}

#[test]
fn test_header_only_table_round_trips() {
    let table = parse_delimited("a,b,c\n", &TableConfig::default()).unwrap();
    let text = to_delimited_string(&table, &TableConfig::default()).unwrap();
    assert_eq!(text, "a,b,c\n");
    assert_eq!(parse_delimited(&text, &TableConfig::default()).unwrap(), table);
}

#[test]
fn test_climate_fixture_round_trips_exactly() {
    let config = TableConfig::default().with_precision(0);
    let table = parse_delimited(CLIMATE_CSV, &config).unwrap();
    let text = to_delimited_string(&table, &config).unwrap();
    assert_eq!(text, CLIMATE_CSV);
}
