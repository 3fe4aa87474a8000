mod registry;
pub use registry::load_registry;

use std::collections::HashMap;

use crate::CleanRecord;

/// Left-join the cleaned rows against the coordinate registry on the exact
/// university name. Every row survives; universities absent from the
/// registry keep empty coordinates.
pub fn enrich_coordinates(
    records: &mut [CleanRecord],
    registry: &HashMap<String, (f64, f64)>,
) {
    for record in records.iter_mut() {
        if let Some(&(lat, lon)) = registry.get(&record.uni) {
            record.lat = Some(lat);
            record.lon = Some(lon);
        }
    }
}
