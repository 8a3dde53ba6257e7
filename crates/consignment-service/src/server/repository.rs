//! In-memory consignment registry.

use parking_lot::Mutex;
use shipping_core::{Result, proto::consignment::Consignment};

/// Storage capability required by the shipping handler.
pub trait Repository: Send + Sync + 'static {
    /// Stores `consignment` and returns the stored value.
    fn create(&self, consignment: Consignment) -> Result<Consignment>;

    /// Returns every stored consignment in insertion order.
    fn get_all(&self) -> Vec<Consignment>;
}

/// Append-only list of accepted consignments.
///
/// A single mutex guards the list and is held only for the append or the
/// snapshot. No duplicate or identity checks are made.
#[derive(Debug, Default)]
pub struct ConsignmentRepository {
    consignments: Mutex<Vec<Consignment>>,
}

impl ConsignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.consignments.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.consignments.lock().is_empty()
    }
}

impl Repository for ConsignmentRepository {
    fn create(&self, consignment: Consignment) -> Result<Consignment> {
        let stored = consignment.clone();
        self.consignments.lock().push(stored);
        Ok(consignment)
    }

    fn get_all(&self) -> Vec<Consignment> {
        self.consignments.lock().clone()
    }
}
