//! Built-in function implementations, grouped by concern

pub mod collection;
