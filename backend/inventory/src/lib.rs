//! Running product inventory and the observation merge rule.

mod inventory;

pub use inventory::Inventory;
