//! Hash collection aliases used throughout the workspace.
//!
//! FxHash trades DoS resistance for speed. All keys here are derived from
//! trusted local dataset files, never from network input.

pub use rustc_hash::{FxHashMap, FxHashSet};
