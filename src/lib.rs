//! Blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates as `blocktris::{core,input,term,types}` so
//! the runner, integration tests and benches share one import path.

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
