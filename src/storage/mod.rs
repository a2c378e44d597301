//! Unit roster and depot log persistence (JSONL).
//!
//! The form talks to storage only through [`UnitProvider`] and
//! [`DepoLogSink`]; [`DepoStore`] is the file-backed implementation of both.

mod error;
mod manager;

pub use error::StorageError;
pub use manager::DepoStore;

use crate::model::{DepoLog, DepoLogInput, Unit};

/// Read-only source of transport units, in display order.
pub trait UnitProvider {
    fn list_units(&self) -> impl Future<Output = Result<Vec<Unit>, StorageError>>;
}

/// Accepts completed depot records.
pub trait DepoLogSink {
    fn create_depo_log(
        &self,
        input: DepoLogInput,
    ) -> impl Future<Output = Result<DepoLog, StorageError>>;
}
