//! Domain helpers layered on the generated Protobuf messages.
//!
//! The wire types are the domain types: a [`Consignment`] read from disk is
//! the same value sent to the service and stored in the registry. This module
//! adds the small amount of behavior they need:
//!
//! - [`Specification::for_consignment`] derives a vessel query from a
//!   consignment.
//! - [`Vessel::fits`] is the first-fit predicate used by the vessel registry.
//! - [`read_json_file`] loads a JSON document into any message deriving
//!   `serde::Deserialize`.

use crate::proto::{consignment::Consignment, vessel::Specification, vessel::Vessel};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

impl Specification {
    /// Derives the vessel requirements for a consignment: its weight, and
    /// one container slot per container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the container count does not fit
    /// in the wire type.
    pub fn for_consignment(consignment: &Consignment) -> Result<Self> {
        let capacity =
            i32::try_from(consignment.containers.len()).map_err(|_| Error::InvalidRequest {
                reason: format!(
                    "Container count {} exceeds maximum allowed ({})",
                    consignment.containers.len(),
                    i32::MAX
                ),
            })?;

        Ok(Self {
            capacity,
            max_weight: consignment.weight,
        })
    }
}

impl Vessel {
    /// Returns `true` if this vessel has room for `spec.capacity` containers
    /// and can carry `spec.max_weight`.
    pub const fn fits(&self, spec: &Specification) -> bool {
        self.capacity >= spec.capacity && self.max_weight >= spec.max_weight
    }
}

impl Consignment {
    /// A consignment is assigned once the orchestrator has stitched a vessel
    /// id into it.
    pub fn is_assigned(&self) -> bool {
        !self.vessel_id.is_empty()
    }
}

/// Reads `path` and decodes its JSON contents into `T`.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read.
/// - [`Error::Decode`] if the contents are not valid JSON for `T`.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
