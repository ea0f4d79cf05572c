use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EpochInfo {
    pub epoch: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub epoch_start: DateTime<Utc>,
}
