use crate::models::{AggregateSummary, DelegationRecord, ValidatorSet};
use crate::services::rewards::RewardLookup;
use crate::services::staking_queries::QueryState;
use crate::utils::memo::Memo;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::HashSet;

pub fn total_rewards(
    delegations: Option<&[DelegationRecord]>,
    validators: Option<&ValidatorSet>,
    rewards: &dyn RewardLookup,
) -> f64 {
    let (Some(delegations), Some(validators)) = (delegations, validators) else {
        return 0.0;
    };
    delegations
        .iter()
        .map(|delegation| rewards.reward(&validators.active_validators, delegation))
        .sum()
}

/// Exact sum of principals; stake routinely exceeds what an f64 holds exactly.
pub fn total_active_stake(delegations: Option<&[DelegationRecord]>) -> BigInt {
    delegations
        .map(|delegations| {
            delegations
                .iter()
                .fold(BigInt::zero(), |total, d| total + &d.staked_principal)
        })
        .unwrap_or_else(BigInt::zero)
}

pub fn distinct_validator_count(delegations: Option<&[DelegationRecord]>) -> usize {
    delegations
        .map(|delegations| {
            delegations
                .iter()
                .map(|d| d.validator_address.as_str())
                .collect::<HashSet<_>>()
                .len()
        })
        .unwrap_or(0)
}

/// Keeps the three staking totals, recomputing each one only when the query
/// versions it depends on move.
pub struct DelegationAggregator<R> {
    rewards: R,
    total_rewards: Memo<(u64, u64), f64>,
    total_active_stake: Memo<u64, BigInt>,
    distinct_validator_count: Memo<u64, usize>,
}

impl<R: RewardLookup> DelegationAggregator<R> {
    pub fn new(rewards: R) -> Self {
        Self {
            rewards,
            total_rewards: Memo::new(),
            total_active_stake: Memo::new(),
            distinct_validator_count: Memo::new(),
        }
    }

    pub fn total_rewards(
        &mut self,
        delegations: &QueryState<Vec<DelegationRecord>>,
        validators: &QueryState<ValidatorSet>,
    ) -> f64 {
        let key = (delegations.version, validators.version);
        let records = delegations.data.as_deref().map(Vec::as_slice);
        let active = validators.data.as_deref();
        let rewards = &self.rewards;
        *self
            .total_rewards
            .get_or_compute(key, || total_rewards(records, active, rewards))
    }

    pub fn total_active_stake(
        &mut self,
        delegations: &QueryState<Vec<DelegationRecord>>,
    ) -> BigInt {
        let records = delegations.data.as_deref().map(Vec::as_slice);
        self.total_active_stake
            .get_or_compute(delegations.version, || total_active_stake(records))
            .clone()
    }

    pub fn distinct_validator_count(
        &mut self,
        delegations: &QueryState<Vec<DelegationRecord>>,
    ) -> usize {
        let records = delegations.data.as_deref().map(Vec::as_slice);
        *self
            .distinct_validator_count
            .get_or_compute(delegations.version, || distinct_validator_count(records))
    }

    pub fn summary(
        &mut self,
        delegations: &QueryState<Vec<DelegationRecord>>,
        validators: &QueryState<ValidatorSet>,
    ) -> AggregateSummary {
        AggregateSummary {
            total_stake: self.total_active_stake(delegations),
            total_rewards: self.total_rewards(delegations, validators),
            distinct_validator_count: self.distinct_validator_count(delegations),
        }
    }

    pub fn reward_lookup(&self) -> &R {
        &self.rewards
    }

    #[cfg(test)]
    fn computations(&self) -> (u64, u64, u64) {
        (
            self.total_rewards.computations(),
            self.total_active_stake.computations(),
            self.distinct_validator_count.computations(),
        )
    }
}
