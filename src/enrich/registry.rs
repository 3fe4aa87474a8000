use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CoordinateEntry {
    uni: String,
    lat: f64,
    lon: f64,
}

/// Load the university coordinate asset and build a name -> (lat, lon)
/// lookup. Loaded once per run and read-only afterwards.
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<HashMap<String, (f64, f64)>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let entries: Vec<CoordinateEntry> = serde_json::from_reader(reader)?;

    let mut lookup = HashMap::new();
    for entry in entries {
        lookup.insert(entry.uni, (entry.lat, entry.lon));
    }

    Ok(lookup)
}
