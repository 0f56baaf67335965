//! Core metadata contracts for the segment store: the [`SegmentProperties`]
//! capability and the immutable [`SegmentSnapshot`] value that implements it.

pub mod attributes;
pub mod error;
pub mod ids;
pub mod properties;
pub mod snapshot;

pub use attributes::AttributeMap;
pub use error::{CoreError, CoreResult};
pub use ids::AttributeId;
pub use properties::SegmentProperties;
pub use snapshot::{SegmentSnapshot, SegmentSnapshotBuilder};
