//! Error types for the risk engine.
//!
//! Missing feed data (no position, no track, no zone center) is never an
//! error here; it is modeled as `Option` and skipped by the evaluators.
//! Only coordinate-range contract violations surface as hard errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoreError {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
}
