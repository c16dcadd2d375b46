use std::io::Write;

use super::error::DatasetError;
use super::model::Dataset;

/// Write `dataset` to `writer` as pretty-printed JSON.
///
/// The output is an array of arrays of numbers, indented two spaces per
/// nesting level, vector and scalar order preserved, terminated by a single
/// newline. The writer is flushed before returning.
pub fn render<W: Write>(dataset: &Dataset, mut writer: W) -> Result<(), DatasetError> {
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render into an owned string.
pub fn render_to_string(dataset: &Dataset) -> Result<String, DatasetError> {
    let mut buf = Vec::new();
    render(dataset, &mut buf)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
