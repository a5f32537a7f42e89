use tracing::debug;

use shelfscan_core::{InventoryRecord, Observation};

/// The running product table for one analysis session.
///
/// An explicit value owned by the session layer and threaded through each
/// reconciliation. Not thread-safe; concurrent sessions must each own their
/// own instance.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    records: Vec<InventoryRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order; sequence numbers are always 1..=len.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge a batch of observations into the inventory, in batch order.
    ///
    /// Merge identity is the exact (brand, expiry-date string) pair. A match
    /// adds the observation's count and refreshes the record's timestamp; an
    /// unmatched observation is appended with the next sequence number.
    /// Existing records never lose count and never change sequence number.
    ///
    /// The parser rejects invalid batches wholesale before this point, so
    /// reconciliation itself needs no rollback.
    pub fn reconcile(&mut self, batch: Vec<Observation>) {
        for obs in batch {
            match self
                .records
                .iter_mut()
                .find(|r| r.brand == obs.brand && r.expiry_date == obs.expiry_date)
            {
                Some(record) => {
                    record.count += obs.count;
                    record.timestamp = obs.timestamp;
                }
                None => {
                    let sequence_number = self.records.len() as u64 + 1;
                    self.records
                        .push(InventoryRecord::from_observation(obs, sequence_number));
                }
            }
        }
        debug!(records = self.records.len(), "Inventory reconciled");
    }
}
