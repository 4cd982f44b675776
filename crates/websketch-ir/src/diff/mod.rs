//! Structural diff engine.
//!
//! Compares two validated captures and reports matched node pairs, additions,
//! and removals, with each matched pair classified as moved/resized/unchanged
//! by its bounds deltas.
//!
//! ## Entry points
//!
//! ```ignore
//! use websketch_ir::diff::{diff, format_diff, DiffOptions};
//!
//! let result = diff(&before, &after, &DiffOptions::default());
//! println!("{}", format_diff(&result));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce an identical `DiffResult`;
//!   the greedy matcher breaks score ties toward earlier tree positions.
//! - **Role gate**: nodes of different roles never match, so a role change
//!   always reports as a removal plus an addition.
//! - **Purity**: neither capture is mutated and no state survives the call.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::diff;
pub use model::{ChangeKind, DiffNode, DiffOptions, DiffResult, NodeMatch};
pub use summary::format_diff;
