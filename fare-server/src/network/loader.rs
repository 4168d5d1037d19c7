//! Distance matrix loader.
//!
//! Reads a station-by-station kilometre matrix from delimited text:
//!
//! ```text
//! 駅,大阪梅田,中津,十三
//! 大阪梅田,,0.9,
//! 中津,,,1.5
//! 十三,,,
//! ```
//!
//! The first header cell is a label and is ignored; the remaining header
//! cells name the destination stations. Each data row starts with the
//! origin station. Blank cells (or `-`) mean the distance is unknown.
//! Station names are trimmed. A column with a blank header, such as the one
//! a trailing comma produces, is skipped as long as its cells are blank.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::domain::Station;

use super::table::DistanceTable;

/// How matrix cells become table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Cell `(A, B)` becomes entry `(A, B)` only.
    #[default]
    Directed,
    /// Cell `(A, B)` becomes entries `(A, B)` and `(B, A)`.
    Symmetric,
}

/// Errors from loading a distance matrix.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to open or read the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row is missing or names no stations
    #[error("distance matrix has no header row of station names")]
    MissingHeader,

    /// A row that should name a station is blank
    #[error("line {line}: blank station name")]
    BlankStation { line: u64 },

    /// A column with a blank header holds a distance
    #[error("line {line}, column {column}: distance under a blank header")]
    UnnamedColumn { line: u64, column: usize },

    /// A cell is neither blank nor a non-negative number
    #[error("line {line}, column {column}: invalid distance {value:?}")]
    InvalidDistance {
        line: u64,
        column: usize,
        value: String,
    },
}

/// A loaded distance table together with its station universe.
#[derive(Debug, Clone, Default)]
pub struct DistanceSource {
    /// Every station named in the header or in a row
    pub stations: BTreeSet<Station>,
    /// Tabulated distances
    pub table: DistanceTable,
}

/// Load a distance matrix from a file.
pub fn load_matrix(path: impl AsRef<Path>, mode: LoadMode) -> Result<DistanceSource, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let source = load_matrix_reader(file, mode)?;

    info!(
        path = %path.display(),
        stations = source.stations.len(),
        entries = source.table.len(),
        ?mode,
        "Loaded distance matrix"
    );

    Ok(source)
}

/// Load a distance matrix from any reader.
pub fn load_matrix_reader<R: Read>(reader: R, mode: LoadMode) -> Result<DistanceSource, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    // `None` marks a column with a blank header
    let columns: Vec<Option<Station>> = headers
        .iter()
        .skip(1)
        .map(|name| Station::parse(name).ok())
        .collect();

    let mut stations: BTreeSet<Station> = columns.iter().flatten().cloned().collect();
    if stations.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let mut table = DistanceTable::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let Some(name) = record.get(0) else {
            continue;
        };
        // Trailing blank lines in spreadsheet exports
        if name.is_empty() && record.iter().all(str::is_empty) {
            continue;
        }
        let from = Station::parse(name).map_err(|_| LoadError::BlankStation { line })?;
        stations.insert(from.clone());

        for (idx, cell) in record.iter().enumerate().skip(1) {
            let Some(km) = parse_cell(cell).map_err(|_| LoadError::InvalidDistance {
                line,
                column: idx + 1,
                value: cell.to_string(),
            })?
            else {
                continue;
            };
            let to = match columns.get(idx - 1) {
                Some(Some(to)) => to,
                Some(None) => {
                    return Err(LoadError::UnnamedColumn {
                        line,
                        column: idx + 1,
                    });
                }
                // Extra cells beyond the header have no destination
                None => continue,
            };

            match mode {
                LoadMode::Directed => table.insert(from.clone(), to.clone(), km),
                LoadMode::Symmetric => table.insert_symmetric(from.clone(), to.clone(), km),
            }
        }
    }

    Ok(DistanceSource { stations, table })
}

/// Parse one matrix cell: `Ok(None)` for blank, `Ok(Some(km))` for a
/// non-negative finite number.
fn parse_cell(cell: &str) -> Result<Option<f64>, ()> {
    if cell.is_empty() || cell == "-" {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(km) if km.is_finite() && km >= 0.0 => Ok(Some(km)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    const MATRIX: &str = "\
駅,大阪梅田,中津,十三
大阪梅田,,0.9,2.4
中津,,,1.5
十三,,-,
";

    #[test]
    fn directed_load_keeps_cells_as_read() {
        let source = load_matrix_reader(MATRIX.as_bytes(), LoadMode::Directed).unwrap();

        assert_eq!(source.stations.len(), 3);
        assert_eq!(source.table.len(), 3);
        assert_eq!(source.table.get(&st("大阪梅田"), &st("中津")), Some(0.9));
        assert_eq!(source.table.get(&st("中津"), &st("十三")), Some(1.5));
        assert!(source.table.get(&st("中津"), &st("大阪梅田")).is_none());
    }

    #[test]
    fn symmetric_load_mirrors_cells() {
        let source = load_matrix_reader(MATRIX.as_bytes(), LoadMode::Symmetric).unwrap();

        assert_eq!(source.table.len(), 6);
        assert_eq!(source.table.get(&st("中津"), &st("大阪梅田")), Some(0.9));
        assert_eq!(source.table.get(&st("十三"), &st("大阪梅田")), Some(2.4));
    }

    #[test]
    fn names_are_trimmed() {
        let csv = "label, A , B\n A ,,1.0\n";
        let source = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap();
        assert_eq!(source.table.get(&st("A"), &st("B")), Some(1.0));
    }

    #[test]
    fn row_stations_join_the_universe() {
        let csv = "label,A\nZ,4.0\n";
        let source = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap();
        assert!(source.stations.contains(&st("Z")));
        assert_eq!(source.table.get(&st("Z"), &st("A")), Some(4.0));
    }

    #[test]
    fn rejects_bad_number_with_position() {
        let csv = "label,A,B\nA,,abc\n";
        let err = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap_err();
        match err {
            LoadError::InvalidDistance {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let csv = "label,A\nB,-2\n";
        let err = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDistance { .. }));
    }

    #[test]
    fn rejects_missing_header() {
        let err = load_matrix_reader("".as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader));

        let err = load_matrix_reader("label\n".as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader));

        let err = load_matrix_reader("label,,\n".as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader));
    }

    #[test]
    fn rejects_blank_row_station() {
        let csv = "label,A\n,1.0\n";
        let err = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::BlankStation { line: 2 }));
    }

    #[test]
    fn trailing_comma_columns_are_skipped() {
        let csv = "駅,A,B,\nA,,1.0,\nB,,,\n";
        let source = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap();

        assert_eq!(source.stations.len(), 2);
        assert_eq!(source.table.len(), 1);
        assert_eq!(source.table.get(&st("A"), &st("B")), Some(1.0));
    }

    #[test]
    fn rejects_distance_under_blank_header() {
        let csv = "駅,A,,B\nA,,2.0,1.0\n";
        let err = load_matrix_reader(csv.as_bytes(), LoadMode::Directed).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnnamedColumn { line: 2, column: 3 }
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MATRIX.as_bytes()).unwrap();

        let source = load_matrix(file.path(), LoadMode::Directed).unwrap();
        assert_eq!(source.table.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_matrix(dir.path().join("absent.csv"), LoadMode::Directed).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn bundled_matrix_covers_every_edge() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/hankyu_kilo.csv");
        let source = load_matrix(path, LoadMode::Directed).unwrap();

        for (a, b) in super::super::hankyu::edges() {
            assert!(source.table.get(&a, &b).is_some(), "missing {a} - {b}");
        }
    }
}
