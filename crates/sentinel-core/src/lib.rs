//! # sentinel-core
//!
//! Core types for the Sentinel verification stub.
//!
//! This crate provides:
//! - The persisted `VerificationStub` record and its status enum
//! - Timestamp formatting for the `timestamp_utc` field
//! - `RecordWriter`, which persists a record to the results file
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use enums::VerificationStatus;
pub use errors::{CoreError, WriteError};
pub use record::{DEFAULT_SEED, STUB_MESSAGE, VerificationStub};
pub use timestamp::format_timestamp;
pub use writer::{DEFAULT_RESULT_FILE, DEFAULT_RESULTS_DIR, RecordWriter};
