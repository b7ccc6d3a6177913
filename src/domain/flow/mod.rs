//! Flow module - Data-driven interviews per life domain.
//!
//! A [`Flow`] is an ordered list of [`Step`]s. Each step writes one slot
//! and its successor rule may skip later steps, which then receive the
//! [`NONE`] sentinel. The dialogue machine interprets any flow the same way.

mod definitions;
mod errors;
mod sequence;
mod step;
mod table;
mod values;

pub use definitions::flow_for_domain;
pub use errors::FlowError;
pub use sequence::{Advance, Flow};
pub use step::{Choice, Skip, Step, Successor};
pub use table::FlowTable;
pub use values::{SlotCondition, SlotKey, SlotRecord, NONE, NOT_SURE};
