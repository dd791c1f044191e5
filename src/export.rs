//! Export helpers for writing batch results to disk.
//!
//! `save_assessments_csv` writes one row per Assessment with every measured
//! field, suitable for spreadsheet triage of a large audit run.
use std::path::Path;

use anyhow::Result;
use csv::Writer;

use crate::assessment::Assessment;

pub fn save_assessments_csv<P: AsRef<Path>>(assessments: &[Assessment], path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    for a in assessments {
        wtr.serialize(a)?;
    }
    wtr.flush()?;
    Ok(())
}
