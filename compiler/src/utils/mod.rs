//! Utility functions for the compiler

pub mod file;
pub mod sql;
pub mod time;
