//! Plain-text route files.
//!
//! One block per route: the route matrix row by row, entries separated by a
//! single space, rows ending in `\n`. Blocks are separated by one blank line.
//! The matrix size is not stored; readers supply it.
//!
//! ```text
//! 0 1 1
//! 1 0 1
//! 1 1 0
//!
//! 0 2 0
//! 2 0 0
//! 0 0 0
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, RouteGenError};
use crate::graph::{EdgeMatrix, MAX_EDGE_WEIGHT};
use crate::models::Route;

/// Writes route matrices in block format.
pub fn write_routes<'a, W, I>(mut writer: W, routes: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Route>,
{
    for (idx, route) in routes.into_iter().enumerate() {
        if idx > 0 {
            writeln!(writer)?;
        }
        write_matrix(&mut writer, route.edges())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes route matrices to a file, replacing it.
pub fn write_routes_file<'a, I>(path: impl AsRef<Path>, routes: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Route>,
{
    write_routes(BufWriter::new(File::create(path)?), routes)
}

fn write_matrix<W: Write>(writer: &mut W, edges: &EdgeMatrix) -> Result<()> {
    for row in edges.rows() {
        let line: Vec<String> = row.iter().map(u8::to_string).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Reads route matrices of the given size from block format.
///
/// Runs of blank lines are treated as one separator. Every block must have
/// exactly `size` rows of `size` integers, each at most [`MAX_EDGE_WEIGHT`].
///
/// # Examples
///
/// ```
/// use u_routegen::io::read_routes;
///
/// let text = "0 1\n1 0\n\n0 2\n2 0\n";
/// let routes = read_routes(text.as_bytes(), 2).unwrap();
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[1].get(0, 1), 2);
/// ```
pub fn read_routes<R: BufRead>(reader: R, size: usize) -> Result<Vec<EdgeMatrix>> {
    let mut routes = Vec::new();
    let mut block: Vec<u8> = Vec::with_capacity(size * size);
    let mut rows = 0usize;
    let mut last_line = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        last_line = line_no;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if rows > 0 {
                routes.push(finish_block(&mut block, &mut rows, size, line_no)?);
            }
            continue;
        }

        if rows == size {
            return Err(RouteGenError::MalformedRoutes {
                line: line_no,
                reason: format!("block has more than {size} rows"),
            });
        }
        let start = block.len();
        for token in trimmed.split_whitespace() {
            let value = token.parse::<u8>().map_err(|_| RouteGenError::MalformedRoutes {
                line: line_no,
                reason: format!("'{token}' is not a matrix entry"),
            })?;
            if value > MAX_EDGE_WEIGHT {
                return Err(RouteGenError::MalformedRoutes {
                    line: line_no,
                    reason: format!("entry {value} exceeds {MAX_EDGE_WEIGHT}"),
                });
            }
            block.push(value);
        }
        if block.len() - start != size {
            return Err(RouteGenError::MalformedRoutes {
                line: line_no,
                reason: format!("expected {size} entries, found {}", block.len() - start),
            });
        }
        rows += 1;
    }

    if rows > 0 {
        routes.push(finish_block(&mut block, &mut rows, size, last_line + 1)?);
    }
    Ok(routes)
}

/// Reads route matrices of the given size from a file.
pub fn read_routes_file(path: impl AsRef<Path>, size: usize) -> Result<Vec<EdgeMatrix>> {
    read_routes(BufReader::new(File::open(path)?), size)
}

fn finish_block(
    block: &mut Vec<u8>,
    rows: &mut usize,
    size: usize,
    line: usize,
) -> Result<EdgeMatrix> {
    if *rows != size {
        return Err(RouteGenError::MalformedRoutes {
            line,
            reason: format!("block ended after {rows} of {size} rows"),
        });
    }
    *rows = 0;
    EdgeMatrix::from_data(size, std::mem::take(block))
}
