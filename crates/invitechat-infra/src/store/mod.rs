//! Message store implementations selectable at startup.

pub mod backend;
pub mod memory;
