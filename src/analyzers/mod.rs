//! Network analysis and reporting.
//!
//! Structural metrics (density, degrees, hubs) come from the flight network;
//! traffic metrics (passenger flow, passengers per flight) come from the raw
//! route records. The summary and segment builders shape those results for
//! display and export.

pub mod aggregate;
pub mod analyzer;
pub mod degree;
pub mod hubs;
pub mod segments;
pub mod summary;
pub mod types;
pub mod utility;
