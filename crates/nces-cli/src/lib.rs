//! Report types, rendering and logging for the `nces` command-line tool.

pub mod logging;
pub mod report;
pub mod types;
