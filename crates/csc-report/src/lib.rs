//! Tabular reports
//!
//! Flattens rare combinations into rows sorted for reading and renders them
//! as CSV or JSON. Also summarises an annotation index.

mod report;
mod summary;
mod writer;

pub use report::*;
pub use summary::*;
pub use writer::CsvWriter;
