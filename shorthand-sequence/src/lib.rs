//! Functional iteration shorthand for ordered sequences.
//!
//! A [`Sequence`] is an ordered, finite, read-only collection. The
//! [`SequenceQuery`] trait attaches single-pass queries to it: `filter`,
//! `reject`, `map`, `reduce`, and the short-circuiting `all`/`any`/`none`
//! checks, each with a fallible `try_` form that propagates the callable's
//! own error type.

mod core;
mod creation;
mod error;
mod traits;
mod variant;

pub use crate::core::{BoxedIter, Sequence};
pub use crate::error::{Error, Result};
pub use crate::traits::{SequenceCore, SequenceQuery};
