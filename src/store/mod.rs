//! Record storage for shift reports.
//!
//! Records are kept denormalized: inputs and derived totals are stored
//! together, and each line-item list is held as encoded JSON text that is
//! decoded on every read.

mod codec;
mod memory;

pub use codec::{decode_line_items, encode_line_items};
pub use memory::ShiftStore;
