pub mod amount_serde;
mod delegation;
mod epoch_info;
mod summary;
mod validator;

pub use delegation::{DelegationRecord, StakeStatus};
pub use epoch_info::EpochInfo;
pub use summary::AggregateSummary;
pub use validator::{Validator, ValidatorSet};
