#![warn(missing_docs)]
//! Core types and utilities for `spath`.
//!
//! This crate provides the dense vertex handle shared by every other `spath` crate, the error
//! taxonomy, vertex positions, and the open lists that drive the search engine.

mod error;
mod indexed_pqueue;
mod position;
mod pqueue;
pub mod traits;
mod vertex;

pub use crate::error::*;
pub use crate::indexed_pqueue::*;
pub use crate::position::*;
pub use crate::pqueue::*;
pub use crate::vertex::*;
