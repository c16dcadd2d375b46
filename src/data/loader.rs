use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{Dataset, Vector};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset previously written by [`render`](super::render::render).
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_json(file).with_context(|| format!("loading {}", path.display()))
}

/// Expected JSON layout (the renderer's output):
///
/// ```json
/// [
///   [0.52, 13.9, ...],
///   [7.01, 2.44, ...],
///   ...
/// ]
/// ```
///
/// Every row must have the same length.
pub fn load_json<R: Read>(reader: R) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_reader(reader).context("parsing JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut vectors = Vec::with_capacity(rows.len());
    let mut expected_dim = None;

    for (i, row) in rows.iter().enumerate() {
        let values = json_array_to_f64(row, i)?;

        match expected_dim {
            None => expected_dim = Some(values.len()),
            Some(dim) if dim != values.len() => {
                bail!("Row {i}: has {} values but row 0 has {dim}", values.len())
            }
            Some(_) => {}
        }

        vectors.push(Vector::new(values));
    }

    Ok(Dataset::from_vectors(vectors)?)
}

fn json_array_to_f64(val: &JsonValue, row: usize) -> Result<Vec<f64>> {
    let arr = val
        .as_array()
        .with_context(|| format!("Row {row}: not a JSON array"))?;

    arr.iter()
        .enumerate()
        .map(|(j, v)| {
            v.as_f64()
                .with_context(|| format!("Row {row}[{j}]: not a number"))
        })
        .collect()
}
