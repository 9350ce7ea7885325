//! Canonical record models and their creation payloads

pub mod datetime;
pub mod lead;
pub mod status;

pub use lead::{CreateLeadRequest, Lead};
pub use status::{CreateStatusCheckRequest, StatusCheck};
