//! End-to-end integration tests
//!
//! These tests drive the complete load → aggregate → render pipeline against
//! CSV data files. Each fixture test:
//! 1. Loads input.csv from a fixture directory through the file-backed storage
//! 2. Renders the monthly summary and the recent transactions listing
//! 3. Compares the rendered text with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path multi-month data
//! - Sign normalization of rows saved with the wrong sign
//! - Mixed date and amount formats, zero amounts
//! - Malformed data files (unknown category, bad amount, wrong header)
//!
//! The remaining tests exercise the sample bootstrap, persistence round-trip
//! and a scripted interactive session against real files.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use finance_tracker::core::TransactionStore;
    use finance_tracker::io::CsvStorage;
    use finance_tracker::report::{render_monthly_summary, render_recent, ReportConfig};
    use finance_tracker::shell::Shell;
    use finance_tracker::types::{Category, TrackerError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn load_fixture(fixture_name: &str) -> Result<TransactionStore<CsvStorage>, TrackerError> {
        let input_path = format!("tests/fixtures/{}/input.csv", fixture_name);
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        TransactionStore::load(CsvStorage::new(input_path))
    }

    /// Run a test fixture by loading input.csv and comparing the rendered
    /// reports with expected.txt
    fn run_test_fixture(fixture_name: &str) {
        let expected_path = format!("tests/fixtures/{}/expected.txt", fixture_name);
        let store = load_fixture(fixture_name)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", fixture_name, e));

        let config = ReportConfig::new(5, 6, "₹");
        let mut output = Vec::new();
        let summary = store.aggregations().monthly_summary().unwrap();
        render_monthly_summary(&mut output, &summary, &config).unwrap();
        render_recent(&mut output, store.recent(config.recent_limit), &config).unwrap();
        let actual_output = String::from_utf8(output).unwrap();

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("sign_normalization")]
    #[case("mixed_formats")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[rstest]
    #[case::unknown_category(
        "unknown_category",
        "CSV parse error at line 3: Invalid category 'Pets'"
    )]
    #[case::bad_amount(
        "bad_amount",
        "CSV parse error at line 4: Invalid amount 'twelve': expected a number"
    )]
    #[case::wrong_header(
        "wrong_header",
        "CSV parse error at line 1: expected header 'Date,Amount,Category,Description', found 'date,amount,category'"
    )]
    fn test_malformed_fixtures(#[case] fixture: &str, #[case] expected_error: &str) {
        let error = load_fixture(fixture).unwrap_err();
        assert_eq!(error.to_string(), expected_error);
    }

    #[test]
    fn test_missing_file_bootstraps_sample_and_persists_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finance_data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        let store = TransactionStore::load_with_rng(
            CsvStorage::new(&path),
            today,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(store.len(), 30);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Date,Amount,Category,Description\n"));
        assert_eq!(contents.lines().count(), 31);

        let reloaded = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        assert_eq!(reloaded.transactions(), store.transactions());
    }

    #[test]
    fn test_header_only_file_is_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "Date,Amount,Category,Description\n").unwrap();

        let store = TransactionStore::load(CsvStorage::new(&path)).unwrap();

        assert!(store.is_empty());
        assert!(matches!(
            store.aggregations().balance_history(),
            Err(TrackerError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_add_persists_normalized_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Date,Amount,Category,Description\n").unwrap();

        let mut store = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        store.add_raw("2024-02-01", "200", "Food", "dinner").unwrap();
        store.add_raw("2024-02-03", "-1500", "income", "salary").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Date,Amount,Category,Description\n\
             2024-02-03,1500,Income,salary\n\
             2024-02-01,-200,Food,dinner\n"
        );

        let reloaded = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        let history = reloaded.aggregations().balance_history().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.final_balance(), Decimal::from(1300));
    }

    #[test]
    fn test_scripted_session_against_data_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::copy("tests/fixtures/happy_path/input.csv", &path).unwrap();
        let store = TransactionStore::load(CsvStorage::new(&path)).unwrap();

        let mut output = Vec::new();
        {
            let script = "2\n2024-03-10\n80\nEntertainment\nCinema\n4\n5\n";
            let mut shell = Shell::new(store, ReportConfig::default(), script.as_bytes(), &mut output)
                .with_today(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
            shell.run().unwrap();
            assert_eq!(shell.store().len(), 9);
        }
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Transaction added: 2024-03-10 Entertainment -₹80.00"));
        assert!(output.contains("2024-03  ₹3,000.00    ₹200.00  ₹2,800.00         93.3%"));

        let reloaded = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        assert_eq!(reloaded.transactions()[0].category(), Category::Entertainment);
        assert_eq!(reloaded.transactions()[0].amount(), Decimal::from(-80));
    }

    #[test]
    fn test_description_whitespace_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Date,Amount,Category,Description\n").unwrap();

        let mut store = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        store.add_raw("2024-02-01", "12", "Food", "  lunch  ").unwrap();

        let reloaded = TransactionStore::load(CsvStorage::new(&path)).unwrap();
        assert_eq!(reloaded.transactions()[0].description(), "  lunch  ");
        assert_eq!(store.transactions(), reloaded.transactions());
    }

    #[test]
    fn test_amounts_at_decimal_limit_load_but_do_not_aggregate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n\
             2024-02-01,79228162514264337593543950335,Food,a\n\
             2024-02-01,79228162514264337593543950335,Food,b\n",
        )
        .unwrap();

        let store = TransactionStore::load(CsvStorage::new(&path)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.aggregations().balance_history(),
            Err(TrackerError::arithmetic_overflow("balance history"))
        );
        assert_eq!(
            store.aggregations().monthly_summary(),
            Err(TrackerError::arithmetic_overflow("monthly summary"))
        );
    }
}
