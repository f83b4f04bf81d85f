use crate::layout::Cell;
use crate::models::Dataset;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Load and validate a dataset document from disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let ds = Dataset::from_json_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(ds)
}

/// Save a dataset in the same JSON shape it is fetched in.
pub fn save_dataset_json<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(dataset)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save computed cells as CSV with header.
pub fn save_cells_csv<P: AsRef<Path>>(cells: &[Cell], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "year",
        "month_index",
        "temperature",
        "variance",
        "x",
        "y",
        "width",
        "height",
        "bucket",
        "color",
    ))?;
    for c in cells {
        wtr.serialize((
            c.year,
            c.month_index,
            c.temperature,
            c.variance,
            c.x,
            c.y,
            c.width,
            c.height,
            c.bucket,
            c.color.to_hex(),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save computed cells as a pretty JSON array.
pub fn save_cells_json<P: AsRef<Path>>(cells: &[Cell], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(cells)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
