use std::path::Path;

use crate::vector::Vec2;

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two finite numbers, got {content:?}")]
    Parse { line: usize, content: String },
}

/// Loader loads an outline, a closed polygon in traversal order.
/// e.g: PlainFileLoader loads `x y` pairs, one point per line
pub trait Loader {
    fn load(&mut self, path: &Path) -> Result<Vec<Vec2>, LoaderError>;
}

/// Loads outline from file path.
/// Blank lines and lines starting with `#` are skipped.
#[derive(Default)]
pub struct PlainFileLoader {}

impl Loader for PlainFileLoader {
    fn load(&mut self, path: &Path) -> Result<Vec<Vec2>, LoaderError> {
        let value = std::fs::read_to_string(path)?;
        parse_outline(&value)
    }
}

/// Parse outline text, the format [`PlainFileLoader`] reads
pub fn parse_outline(value: &str) -> Result<Vec<Vec2>, LoaderError> {
    let mut points = vec![];
    for (idx, line) in value.lines().enumerate() {
        if let Some(point) = parse_point(idx + 1, line)? {
            points.push(point);
        }
    }
    Ok(points)
}

fn parse_point(line_no: usize, line: &str) -> Result<Option<Vec2>, LoaderError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parse_error = || LoaderError::Parse {
        line: line_no,
        content: line.to_string(),
    };

    let mut iter = line.split_whitespace();
    let (Some(x), Some(y), None) = (iter.next(), iter.next(), iter.next()) else {
        return Err(parse_error());
    };
    let x = x.parse::<f64>().map_err(|_| parse_error())?;
    let y = y.parse::<f64>().map_err(|_| parse_error())?;

    let point = Vec2::new(x, y);
    if !point.is_finite() {
        return Err(parse_error());
    }
    Ok(Some(point))
}
