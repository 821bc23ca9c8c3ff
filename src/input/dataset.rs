use std::path::Path;

use crate::input::{InputError, open_reader, path_display};
use crate::model::dataset::Dataset;

pub fn read_dataset(path: &Path) -> Result<Dataset, InputError> {
    let mut reader = open_reader(path)?;
    let mut line = String::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    let mut line_no = 0usize;
    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let (x, y) = parse_pair(value).map_err(|reason| InputError::InvalidRow {
            path: path_display(path).to_string(),
            line: line_no,
            reason,
        })?;
        xs.push(x);
        ys.push(y);
    }

    Ok(Dataset::new(xs, ys))
}

fn parse_pair(value: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(format!("expected 2 columns, found {}", parts.len()));
    }
    let x = parse_field(parts[0])?;
    let y = parse_field(parts[1])?;
    Ok((x, y))
}

fn parse_field(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|e| format!("{token:?}: {e}"))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dataset.rs"]
mod tests;
