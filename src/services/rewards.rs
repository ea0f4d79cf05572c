use crate::models::{DelegationRecord, StakeStatus, Validator};
use log::warn;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

pub trait RewardLookup {
    /// Reward accrued by `delegation`, 0 when it cannot be determined.
    fn reward(&self, active_validators: &[Validator], delegation: &DelegationRecord) -> f64;
}

/// Uses the reward the node estimates for each stake since its activation.
/// Only active stakes with a validator still in the active set earn anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatedRewards;

impl RewardLookup for EstimatedRewards {
    fn reward(&self, active_validators: &[Validator], delegation: &DelegationRecord) -> f64 {
        if delegation.status != StakeStatus::Active {
            return 0.0;
        }
        if !active_validators
            .iter()
            .any(|v| v.address == delegation.validator_address)
        {
            return 0.0;
        }
        let Some(reward) = &delegation.estimated_reward else {
            return 0.0;
        };

        if *reward < BigInt::zero() {
            warn!(
                "Negative estimated reward {} for stake {}",
                reward, delegation.id
            );
            return 0.0;
        }
        reward.to_f64().unwrap_or(0.0)
    }
}
