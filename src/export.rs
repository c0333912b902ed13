use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::layout::Layout;

/// Serialize a layout to the JSON document the graph renderer consumes
/// (and that the surrounding application persists verbatim).
pub fn to_json(layout: &Layout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(layout)
}

pub fn write_json(layout: &Layout, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, layout)?;
    Ok(())
}

/// Parse a previously exported document back into a layout, e.g. when the
/// interactive editor reopens a saved mind map.
pub fn from_json(input: &str) -> serde_json::Result<Layout> {
    serde_json::from_str(input)
}
