//! Browser environment helpers.

pub mod logging;
