use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::domain::destination::Destination;
use crate::domain::record::DestinationRecord;
use crate::error::Result;
use crate::ports::record_sink::RecordSink;

/// Writes pretty-printed JSON artifacts into one output directory: the
/// resolved-id map once per run, then one file per destination.
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    /// Bootstraps the output directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn write_json(&self, filename: &str, value: &impl Serialize) -> Result<()> {
        let path = self.dir.join(filename);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json)?;
        info!(path = %path.display(), "wrote output file");
        Ok(())
    }
}

impl RecordSink for JsonFileSink {
    fn write_location_map(&self, destinations: &[Destination]) -> Result<()> {
        let map: serde_json::Map<String, serde_json::Value> = destinations
            .iter()
            .filter_map(|destination| {
                destination.resolved.as_ref().map(|location| {
                    (
                        destination.name.clone(),
                        serde_json::json!({
                            "dest_id": location.id,
                            "dest_type": location.kind,
                        }),
                    )
                })
            })
            .collect();
        self.write_json("destination_ids.json", &map)
    }

    fn write_record(&self, record: &DestinationRecord) -> Result<()> {
        self.write_json(&format!("{}_data.json", record.file_stem()), record)
    }
}
