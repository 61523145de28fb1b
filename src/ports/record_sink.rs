use crate::domain::destination::Destination;
use crate::domain::record::DestinationRecord;
use crate::error::Result;

/// Persistence for finished artifacts: the resolved-id map once per run,
/// then one record per processed destination.
pub trait RecordSink: Send + Sync {
    fn write_location_map(&self, destinations: &[Destination]) -> Result<()>;
    fn write_record(&self, record: &DestinationRecord) -> Result<()>;
}
