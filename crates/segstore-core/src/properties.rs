use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Read-only view of a segment's general metadata.
///
/// Components that only need generic segment metadata should take this trait
/// rather than a concrete type such as [`crate::SegmentSnapshot`].
pub trait SegmentProperties: Send + Sync {
    /// Name of the segment.
    fn name(&self) -> &str;

    /// Logical length of the segment in bytes.
    fn length(&self) -> i64;

    /// Whether the segment is sealed for modifications.
    fn is_sealed(&self) -> bool;

    /// Whether the segment is deleted (does not exist).
    fn is_deleted(&self) -> bool;

    /// Last time the segment was modified.
    fn last_modified(&self) -> DateTime<Utc>;
}

macro_rules! forward_segment_properties {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<T: SegmentProperties + ?Sized> SegmentProperties for $wrapper {
                fn name(&self) -> &str {
                    (**self).name()
                }

                fn length(&self) -> i64 {
                    (**self).length()
                }

                fn is_sealed(&self) -> bool {
                    (**self).is_sealed()
                }

                fn is_deleted(&self) -> bool {
                    (**self).is_deleted()
                }

                fn last_modified(&self) -> DateTime<Utc> {
                    (**self).last_modified()
                }
            }
        )+
    };
}

forward_segment_properties!(&T, Box<T>, Arc<T>);
