//! In-memory vessel registry.
//!
//! The registry is seeded once at startup and never mutated afterwards, so
//! the fleet is shared as an `Arc<[Vessel]>` and lookups need no lock.

use shipping_core::{
    Error, Result,
    proto::vessel::{Specification, Vessel},
};
use std::sync::Arc;

/// Storage capability required by the vessel handler.
pub trait Repository: Send + Sync + 'static {
    /// Returns the first vessel, in registration order, that fits `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VesselNotFound`] carrying the requested specification
    /// when no vessel qualifies.
    fn find_available(&self, spec: &Specification) -> Result<Vessel>;
}

/// A fixed, ordered fleet.
#[derive(Debug, Clone)]
pub struct VesselRepository {
    vessels: Arc<[Vessel]>,
}

impl VesselRepository {
    pub fn new(vessels: impl Into<Arc<[Vessel]>>) -> Self {
        Self {
            vessels: vessels.into(),
        }
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }
}

impl Repository for VesselRepository {
    fn find_available(&self, spec: &Specification) -> Result<Vessel> {
        self.vessels
            .iter()
            .find(|vessel| vessel.fits(spec))
            .cloned()
            .ok_or(Error::VesselNotFound {
                capacity: spec.capacity,
                max_weight: spec.max_weight,
            })
    }
}
