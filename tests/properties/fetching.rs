//! Fetching from an empty directory must report absence, never an
//! error, for any well-formed relative name.

use std::path::Path;

use bootsmith::{DiskFetcher, FetchOutcome, FileFetcher};
use proptest::prelude::*;

proptest! {
    #[test]
    fn missing_names_are_absent_not_errors(name in "[a-z]{1,12}(/[a-z]{1,12}){0,3}\\.(key|pub|txt)") {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DiskFetcher::new(dir.path());

        let outcome = fetcher.fetch_by_name(Path::new(&name)).unwrap();

        prop_assert_eq!(outcome, FetchOutcome::Absent);
    }
}
