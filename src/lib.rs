//! Block Blast (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockblast::{core,adapter,term,input,engine,types}`
//! so the binary, integration tests and benches share one import path.

pub use blockblast_adapter as adapter;
pub use blockblast_core as core;
pub use blockblast_engine as engine;
pub use blockblast_input as input;
pub use blockblast_term as term;
pub use blockblast_types as types;
