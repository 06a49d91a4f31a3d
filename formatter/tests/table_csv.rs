use formatter::{ApplyReport, CellStyle, ColumnRule, FormatError, Table, PLACEHOLDER};
use std::{fs::File, io::{BufReader, Cursor}, path::PathBuf};

fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

fn parse_fixture() -> Table {
    let path = fixture_path("csv/map_transactions.csv");
    let file =
        File::open(&path).unwrap_or_else(|e| panic!("failed to open CSV fixture {path:?}: {e}"));
    Table::parse(BufReader::new(file)).expect("failed to parse CSV fixture")
}

fn dashboard_rules() -> Vec<ColumnRule> {
    vec![
        ColumnRule::new("Transaction_count", CellStyle::Count),
        ColumnRule::new("Transaction_amount", CellStyle::RupeesToCrore),
        ColumnRule::new("Avg_payment", CellStyle::Rupees),
        ColumnRule::new("Registered_users", CellStyle::Count),
    ]
}

fn row_of<'a>(table: &'a Table, state: &str) -> Vec<&'a str> {
    table
        .rows()
        .iter()
        .find(|row| row.get(0) == Some(state))
        .unwrap_or_else(|| panic!("no row for state {state}"))
        .iter()
        .collect()
}

#[test]
fn fixture_rows_are_formatted_per_column() {
    let mut table = parse_fixture();
    let report = table.apply(&dashboard_rules()).expect("rules should apply");

    assert_eq!(report, ApplyReport { formatted: 18, substituted: 2 });

    assert_eq!(
        row_of(&table, "maharashtra"),
        vec![
            "maharashtra", "2023", "4", "1,92,34,56,789", "₹2,77,865.43 Cr", "₹1,444.62",
            "5,67,89,012",
        ]
    );
    assert_eq!(
        row_of(&table, "karnataka"),
        vec![
            "karnataka", "2023", "4", "1,65,43,21,098", "₹2,12,345.67 Cr", "₹1,283.60",
            "4,56,78,901",
        ]
    );
    assert_eq!(
        row_of(&table, "goa"),
        vec!["goa", "2023", "4", "98,76,543", "₹1,523.45 Cr", "₹1,542.50", "9,87,654"]
    );
    assert_eq!(
        row_of(&table, "lakshadweep"),
        vec!["lakshadweep", "2023", "4", "4,321", "₹0.65 Cr", "₹1,514.28", "1,234"]
    );
}

#[test]
fn invalid_cells_become_placeholders() {
    let mut table = parse_fixture();
    table.apply(&dashboard_rules()).expect("rules should apply");

    let ladakh = row_of(&table, "ladakh");
    assert_eq!(ladakh[3], PLACEHOLDER, "'n/a' count should be replaced");
    assert_eq!(ladakh[4], PLACEHOLDER, "negative amount should be replaced");
    assert_eq!(ladakh[5], "₹0.00", "empty average is zero");
    assert_eq!(ladakh[6], "56");
}

#[test]
fn untouched_columns_keep_original_text() {
    let original = parse_fixture();
    let mut table = parse_fixture();
    table.apply(&dashboard_rules()).expect("rules should apply");

    assert_eq!(original.headers(), table.headers());
    for (a, b) in original.rows().iter().zip(table.rows()) {
        assert_eq!(a.get(0), b.get(0));
        assert_eq!(a.get(1), b.get(1));
        assert_eq!(a.get(2), b.get(2));
    }
}

#[test]
fn written_csv_parses_back_with_same_cells() {
    let mut table = parse_fixture();
    table.apply(&dashboard_rules()).expect("rules should apply");

    let mut buf: Vec<u8> = Vec::new();
    table.write_csv(&mut buf).expect("failed to write table");

    let reparsed = Table::parse(Cursor::new(&buf)).expect("failed to parse written table");
    assert_eq!(reparsed.headers(), table.headers());
    assert_eq!(reparsed.rows(), table.rows());
}

#[test]
fn rule_for_missing_column_is_an_error() {
    let mut table = parse_fixture();
    let err = table
        .apply(&[ColumnRule::new("App_opens", CellStyle::Count)])
        .unwrap_err();

    assert!(matches!(err, FormatError::Header(_)), "unexpected error: {err}");
}
