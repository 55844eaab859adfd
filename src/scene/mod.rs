//! Mitsuba scene serialization: document builder, number formatting and output sinks.

pub(crate) mod document;
pub(crate) mod format;
pub(crate) mod sink;
pub(crate) mod template;
