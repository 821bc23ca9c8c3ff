use std::io::Read;
use std::path::Path;

use crate::input::{InputError, open_reader, path_display};

/// Reads the query abscissa: the whole file must hold exactly one float.
pub fn read_query(path: &Path) -> Result<f64, InputError> {
    let mut reader = open_reader(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let invalid = |reason: String| InputError::InvalidQuery {
        path: path_display(path).to_string(),
        reason,
    };

    let mut tokens = text.split_whitespace();
    let Some(token) = tokens.next() else {
        return Err(invalid("file is empty".to_string()));
    };
    if tokens.next().is_some() {
        return Err(invalid("expected a single value".to_string()));
    }
    token
        .parse::<f64>()
        .map_err(|e| invalid(format!("{token:?}: {e}")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/query.rs"]
mod tests;
