use crate::models::EpochInfo;

#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    pub address: String,
    pub name: String,
    pub apy: Option<f64>,
}

/// Active validators as read at a given epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorSet {
    pub epoch: EpochInfo,
    pub active_validators: Vec<Validator>,
}

impl ValidatorSet {
    pub fn find(&self, address: &str) -> Option<&Validator> {
        self.active_validators.iter().find(|v| v.address == address)
    }
}
