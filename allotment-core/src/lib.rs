//! Exam seat allotment engine.
//!
//! The engine turns cohort definitions (identifier prefix + numeric range),
//! a common-paper grouping directive, and a physical room description into a
//! seating plan where adjacent seats on a bench never hold two students from
//! the same cohort while another cohort still has students waiting.

pub mod conf;
pub mod engine;
pub mod error;
pub mod model;

pub use engine::generate_allotment;
pub use error::AllotmentError;
