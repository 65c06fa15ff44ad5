use crate::error::Result;
use crate::schema::RawDataset;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Deserializes one category fixture from an in-memory JSON value.
pub fn dataset_from_value(value: Value) -> Result<RawDataset> {
    Ok(serde_json::from_value(value)?)
}

/// Deserializes one category fixture from a reader.
pub fn dataset_from_reader<R: Read>(reader: R) -> Result<RawDataset> {
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the per-category fixture files the dashboard ships, in the order
/// given. Fails on unreadable files or JSON syntax errors; missing fields
/// inside a file are not errors (they default during normalization).
pub fn load_datasets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawDataset>> {
    let mut datasets = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = dataset_from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} items from {}",
            dataset.items.len(),
            path.display()
        );
        datasets.push(dataset);
    }
    Ok(datasets)
}
