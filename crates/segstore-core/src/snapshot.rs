use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::attributes::AttributeMap;
use crate::error::{CoreError, CoreResult};
use crate::properties::SegmentProperties;

/// Immutable point-in-time snapshot of a segment's metadata.
///
/// A snapshot is never a live view: callers needing fresher data must obtain a
/// new one from whatever owns the segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentSnapshot {
    name: String,
    length: i64,
    sealed: bool,
    deleted: bool,
    last_modified: DateTime<Utc>,
    attributes: AttributeMap,
}

impl SegmentSnapshot {
    /// Creates a snapshot from explicit fields.
    ///
    /// `last_modified` defaults to the current instant when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        length: i64,
        sealed: bool,
        deleted: bool,
        attributes: impl Into<AttributeMap>,
        last_modified: Option<DateTime<Utc>>,
    ) -> CoreResult<Self> {
        let name = check_name(name.into())?;
        let last_modified = last_modified.unwrap_or_else(|| {
            trace!(segment = %name, "defaulting last_modified to current time");
            Utc::now()
        });

        Ok(Self {
            name,
            length,
            sealed,
            deleted,
            last_modified,
            attributes: attributes.into(),
        })
    }

    /// Starts building a snapshot field by field.
    #[must_use]
    pub fn builder() -> SegmentSnapshotBuilder {
        SegmentSnapshotBuilder::default()
    }

    /// Creates a snapshot copying every property of `base` but replacing its
    /// attributes with `attributes`.
    ///
    /// Whatever attributes `base` carries are discarded, and `last_modified`
    /// is taken as reported without defaulting.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when `base` reports an empty name.
    pub fn from_properties<P>(base: &P, attributes: impl Into<AttributeMap>) -> CoreResult<Self>
    where
        P: SegmentProperties + ?Sized,
    {
        let name = check_name(base.name().to_owned())?;
        Ok(Self {
            name,
            length: base.length(),
            sealed: base.is_sealed(),
            deleted: base.is_deleted(),
            last_modified: base.last_modified(),
            attributes: attributes.into(),
        })
    }

    /// Returns a copy of this snapshot carrying `attributes` instead of its own.
    #[must_use]
    pub fn with_attributes(&self, attributes: impl Into<AttributeMap>) -> Self {
        Self {
            attributes: attributes.into(),
            ..self.clone()
        }
    }

    /// Attributes captured with this snapshot.
    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}

fn check_name(name: String) -> CoreResult<String> {
    if name.is_empty() {
        debug!(argument = "name", "rejecting segment snapshot with empty name");
        return Err(CoreError::invalid_argument("name", "must not be empty"));
    }
    Ok(name)
}

impl SegmentProperties for SegmentSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> i64 {
        self.length
    }

    fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }
}

impl fmt::Display for SegmentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name = {}, Length = {}, Sealed = {}, Deleted = {}, LastModified = {}",
            self.name, self.length, self.sealed, self.deleted, self.last_modified
        )
    }
}

/// Builder for [`SegmentSnapshot`]; validation happens in [`Self::build`].
#[derive(Debug, Clone, Default)]
pub struct SegmentSnapshotBuilder {
    name: String,
    length: i64,
    sealed: bool,
    deleted: bool,
    attributes: AttributeMap,
    last_modified: Option<DateTime<Utc>>,
}

impl SegmentSnapshotBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn sealed(mut self, sealed: bool) -> Self {
        self.sealed = sealed;
        self
    }

    #[must_use]
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Sets the attributes; the input is copied, so later changes to it are not observed.
    #[must_use]
    pub fn attributes(mut self, attributes: impl Into<AttributeMap>) -> Self {
        self.attributes = attributes.into();
        self
    }

    #[must_use]
    pub fn last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Finalizes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when no non-empty name was set.
    pub fn build(self) -> CoreResult<SegmentSnapshot> {
        SegmentSnapshot::new(
            self.name,
            self.length,
            self.sealed,
            self.deleted,
            self.attributes,
            self.last_modified,
        )
    }
}
