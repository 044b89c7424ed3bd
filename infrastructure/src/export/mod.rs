//! Export adapters
//!
//! The original tool wrote one workbook with an assignments sheet and the
//! original roster sheet. The CSV exporter writes those as two files; the
//! JSON exporter writes a single document with both plus the summary.

pub mod csv;
pub mod json;
