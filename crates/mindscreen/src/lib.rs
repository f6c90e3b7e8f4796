//! Student depression-risk screening service.
//!
//! Survey answers collected in one of two locales are reduced to the numeric
//! feature space of a pre-trained binary classifier, scaled with the scaler
//! fitted alongside it, and classified. The label then selects localized
//! result copy.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
