//! Term Cube (workspace facade crate).
//!
//! Re-exports the member crates as `term_cube::{core, term, types}` so the
//! binary, integration tests and benches share one import path.

pub use term_cube_core as core;
pub use term_cube_term as term;
pub use term_cube_types as types;
