use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VerificationStatus;
use crate::errors::CoreError;
use crate::timestamp::{format_timestamp, parse_timestamp};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: i64 = 42;

/// Fixed explanation carried by every stub record.
pub const STUB_MESSAGE: &str = "Replace stub with full synthetic verification pipeline.";

/// Placeholder verification result persisted to the results directory.
///
/// Field order is the serialized key order and must not change: downstream
/// consumers read `seed`, `timestamp_utc`, `status`, `message` in that order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationStub {
    pub seed: i64,
    pub timestamp_utc: String,
    pub status: VerificationStatus,
    pub message: String,
}

impl VerificationStub {
    /// Build a record stamped with the current UTC time.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self::at(seed, Utc::now())
    }

    /// Build a record stamped with `at`.
    #[must_use]
    pub fn at(seed: i64, at: DateTime<Utc>) -> Self {
        Self {
            seed,
            timestamp_utc: format_timestamp(at),
            status: VerificationStatus::Stub,
            message: STUB_MESSAGE.to_string(),
        }
    }

    /// Parse `timestamp_utc` back into an instant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the field is not an ISO-8601
    /// timestamp ending in `Z`.
    pub fn timestamp(&self) -> Result<DateTime<Utc>, CoreError> {
        parse_timestamp(&self.timestamp_utc)
    }

    /// Render the record as 2-space indented JSON without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// JSON Schema describing the persisted file.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the schema cannot be converted.
    pub fn json_schema() -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(schemars::schema_for!(Self))
    }
}

impl Default for VerificationStub {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
