//! Dataset loading.
//!
//! A single sequential pass: read the header, parse each entry line, and
//! feed valid entries into a fresh [`RouteIndex`]. Bad entry lines are
//! collected as warnings rather than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::index::RouteIndex;

use super::error::{DatasetError, LoadWarning};
use super::parser::parse_route_line;

/// Summary of one load: what the header promised, what was found, and
/// everything worth logging.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Entry count declared by the header line, when it parsed.
    pub declared: Option<u64>,

    /// Entry lines seen after the header, valid or not.
    pub entries_seen: u64,

    /// Entry lines that made it into the index.
    pub entries_loaded: u64,

    /// Non-fatal findings, in the order they were hit.
    pub warnings: Vec<LoadWarning>,
}

/// Load a dataset from a file path.
pub fn load_path(path: impl AsRef<Path>) -> Result<(RouteIndex, LoadReport), DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file))
}

/// Load a dataset from any buffered reader.
///
/// Returns the built index together with a [`LoadReport`]; the report's
/// warnings never invalidate the index. Only I/O failures are errors.
pub fn load_reader(reader: impl BufRead) -> Result<(RouteIndex, LoadReport), DatasetError> {
    let mut index = RouteIndex::new();
    let mut report = LoadReport::default();
    let mut lines = reader.lines();

    // Header: the declared entry count. It is a diagnostic cross-check
    // only and never bounds the parse loop.
    match lines.next() {
        None => return Ok((index, report)),
        Some(header) => {
            let header = header?;
            let token = header.trim();
            match token.parse::<u64>() {
                Ok(count) => report.declared = Some(count),
                Err(_) => report.warnings.push(LoadWarning::BadHeader {
                    token: token.to_string(),
                }),
            }
        }
    }

    for (num, line) in lines.enumerate() {
        let line = line?;
        report.entries_seen += 1;
        match parse_route_line(&line) {
            Ok(entry) => {
                index.add_entry(&entry);
                report.entries_loaded += 1;
            }
            Err(error) => report.warnings.push(LoadWarning::InvalidEntry {
                // 1-based file position, accounting for the header line
                line: num + 2,
                error,
            }),
        }
    }

    if let Some(declared) = report.declared {
        if declared != report.entries_seen {
            report.warnings.push(LoadWarning::CountMismatch {
                declared,
                found: report.entries_seen,
            });
        }
    }

    Ok((index, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::error::InvalidRoute;
    use crate::domain::StationId;
    use std::io::Cursor;

    fn load(data: &str) -> (RouteIndex, LoadReport) {
        load_reader(Cursor::new(data)).unwrap()
    }

    fn sid(n: i64) -> StationId {
        StationId(n)
    }

    #[test]
    fn two_route_dataset() {
        let (index, report) = load("2\n100 1 2 3\n101 3 4\n");

        assert!(index.has_connection(sid(1), sid(2)));
        assert!(!index.has_connection(sid(1), sid(4)));
        assert!(index.has_connection(sid(3), sid(4)));
        assert!(!index.has_connection(sid(1), sid(99)));

        assert_eq!(report.declared, Some(2));
        assert_eq!(report.entries_seen, 2);
        assert_eq!(report.entries_loaded, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn no_trailing_newline() {
        let (index, report) = load("2\n100 1 2 3\n101 3 4");

        assert!(index.has_connection(sid(3), sid(4)));
        assert_eq!(report.entries_seen, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn single_station_route_is_skipped() {
        let (index, report) = load("1\n50 7\n");

        assert!(index.is_empty());
        assert!(!index.has_connection(sid(7), sid(7)));
        assert_eq!(
            report.warnings,
            vec![LoadWarning::InvalidEntry {
                line: 2,
                error: InvalidRoute::TooFewStations,
            }]
        );
    }

    #[test]
    fn bad_line_does_not_stop_the_load() {
        let (index, report) = load("3\n100 1 2\n101 3 x\n102 4 5\n");

        // The two good lines either side of the bad one both loaded.
        assert!(index.has_connection(sid(1), sid(2)));
        assert!(index.has_connection(sid(4), sid(5)));
        assert!(index.station(sid(3)).is_none());

        assert_eq!(report.entries_seen, 3);
        assert_eq!(report.entries_loaded, 2);
        assert_eq!(
            report.warnings,
            vec![LoadWarning::InvalidEntry {
                line: 3,
                error: InvalidRoute::BadToken {
                    token: "x".to_string()
                },
            }]
        );
    }

    #[test]
    fn count_mismatch_is_a_warning_not_an_error() {
        let (index, report) = load("5\n100 1 2\n");

        assert!(index.has_connection(sid(1), sid(2)));
        assert_eq!(
            report.warnings,
            vec![LoadWarning::CountMismatch {
                declared: 5,
                found: 1,
            }]
        );
    }

    #[test]
    fn invalid_lines_still_count_toward_the_declared_total() {
        let (_, report) = load("2\n100 1 2\nnot a route\n");

        assert_eq!(report.entries_seen, 2);
        assert_eq!(report.entries_loaded, 1);
        // One warning for the bad line, none for the count.
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn bad_header_is_a_warning_and_entries_still_load() {
        let (index, report) = load("lots\n100 1 2\n");

        assert!(index.has_connection(sid(1), sid(2)));
        assert_eq!(report.declared, None);
        assert_eq!(
            report.warnings,
            vec![LoadWarning::BadHeader {
                token: "lots".to_string()
            }]
        );
    }

    #[test]
    fn empty_source_loads_an_empty_index() {
        let (index, report) = load("");

        assert!(index.is_empty());
        assert_eq!(report.declared, None);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn duplicate_mentions_merge_into_one_station() {
        // Station 3 appears on both routes; it must be one entry with
        // both route IDs.
        let (index, _) = load("2\n100 1 3\n101 3 4\n");

        let station = index.station(sid(3)).unwrap();
        assert_eq!(station.route_ids().len(), 2);
    }

    #[test]
    fn loading_twice_gives_identical_answers() {
        let data = "3\n100 1 2 3\n101 3 4\nbroken line\n";
        let (a, _) = load(data);
        let (b, _) = load(data);

        for dep in 0..6 {
            for arr in 0..6 {
                assert_eq!(
                    a.has_connection(sid(dep), sid(arr)),
                    b.has_connection(sid(dep), sid(arr)),
                    "disagreement for ({dep}, {arr})"
                );
            }
        }
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load_path("/no/such/dataset.txt").unwrap_err();
        assert!(matches!(err, DatasetError::SourceUnavailable { .. }));
    }

    #[test]
    fn load_path_reads_a_real_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1\n100 1 2\n").unwrap();

        let (index, report) = load_path(file.path()).unwrap();
        assert!(index.has_connection(sid(1), sid(2)));
        assert!(report.warnings.is_empty());
    }
}
