pub mod destination;
pub mod property;
pub mod record;
pub mod review;

pub use destination::{Destination, ResolvedLocation};
pub use property::{PropertyDetail, PropertySummary};
pub use record::DestinationRecord;
pub use review::Review;
