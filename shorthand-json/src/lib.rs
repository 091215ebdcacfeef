//! JSON string shorthand: parse JSON text into a [`Value`] and render a
//! [`Value`] back out, with a bridge from JSON arrays into
//! [`shorthand_sequence::Sequence`] so the functional queries apply.

mod error;
mod value;

pub use crate::error::{Error, Result};
pub use crate::value::{parse, Value};
