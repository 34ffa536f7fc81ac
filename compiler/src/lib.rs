//! FilterQL
//!
//! Compiles end-user filter selections into SQL WHERE clauses. The library
//! lives under [`data::filters`]; [`core`] wires it into the `filterql`
//! command line tool.

mod app;
pub mod core;
pub mod data;
pub mod utils;
