//! Render already computed JSON reports as sortable, exportable tables.

pub mod report;
pub mod utils;
