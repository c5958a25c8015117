//! Travel-time CSV ingestion.
//!
//! Expected layout, one header row and one row per node in header order:
//!
//! ```text
//! Store,Hub,A,B
//! Hub,0,410,380
//! A,405,0,120
//! B,390,118,0
//! ```

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::distance::TravelMatrix;
use crate::error::{Result, RouteGenError};
use crate::graph::NodeLabels;

/// Parses a labeled travel-time matrix.
///
/// The first header cell is a free-form label; the remaining cells name the
/// nodes. Each row must start with the name of the matching column.
///
/// # Examples
///
/// ```
/// use u_routegen::io::read_travel_csv;
///
/// let text = "Store,Hub,A\nHub,0,12.5\nA,13,0\n";
/// let (labels, travel) = read_travel_csv(text.as_bytes()).unwrap();
/// assert_eq!(labels.index_of("A").unwrap(), 1);
/// assert_eq!(travel.get(0, 1), 12.5);
/// ```
pub fn read_travel_csv<R: Read>(reader: R) -> Result<(NodeLabels, TravelMatrix)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let names: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_string).collect();
    let labels = NodeLabels::new(names)?;
    let n = labels.len();

    let mut rows = Vec::with_capacity(n);
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row_name = record.get(0).unwrap_or_default();
        match labels.names().get(i) {
            Some(expected) if expected == row_name => {}
            Some(expected) => {
                return Err(RouteGenError::InvalidParameter(format!(
                    "row {} is '{row_name}' but column {} is '{expected}'",
                    i + 1,
                    i + 1
                )))
            }
            None => {
                return Err(RouteGenError::InvalidParameter(format!(
                    "travel table has more rows than its {n} columns"
                )))
            }
        }
        let row = record
            .iter()
            .skip(1)
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| {
                    RouteGenError::InvalidParameter(format!(
                        "travel time '{cell}' in row '{row_name}' is not a number"
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.len() != n {
        return Err(RouteGenError::DimensionMismatch {
            expected: n,
            found: rows.len(),
        });
    }
    let travel = TravelMatrix::from_rows(&rows)?;
    Ok((labels, travel))
}

/// Reads a labeled travel-time matrix from a file.
pub fn read_travel_csv_path(path: impl AsRef<Path>) -> Result<(NodeLabels, TravelMatrix)> {
    let file = std::fs::File::open(path)?;
    read_travel_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let text = "Store, Hub, A, B\nHub,0,4,4\nA,4,0,1\nB,4,1,0\n";
        let (labels, travel) = read_travel_csv(text.as_bytes()).expect("valid");
        assert_eq!(labels.names(), &["Hub", "A", "B"]);
        assert_eq!(travel.size(), 3);
        assert_eq!(travel.get(1, 2), 1.0);
    }

    #[test]
    fn test_row_order_mismatch() {
        let text = "Store,Hub,A\nA,4,0\nHub,0,4\n";
        assert!(matches!(
            read_travel_csv(text.as_bytes()),
            Err(RouteGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_missing_row() {
        let text = "Store,Hub,A\nHub,0,4\n";
        assert!(matches!(
            read_travel_csv(text.as_bytes()),
            Err(RouteGenError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_not_a_number() {
        let text = "Store,Hub,A\nHub,0,far\nA,4,0\n";
        assert!(read_travel_csv(text.as_bytes()).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        let text = "Store,Hub,A\nHub,0,-4\nA,4,0\n";
        assert!(matches!(
            read_travel_csv(text.as_bytes()),
            Err(RouteGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ragged_row() {
        let text = "Store,Hub,A\nHub,0\nA,4,0\n";
        assert!(read_travel_csv(text.as_bytes()).is_err());
    }
}
