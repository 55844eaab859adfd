//! Shared error taxonomy and small numeric primitives.

pub(crate) mod error;
pub(crate) mod math;
