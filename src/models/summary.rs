use num_bigint::BigInt;

/// Display-only totals derived from the current delegations and validators.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    pub total_stake: BigInt,
    pub total_rewards: f64,
    pub distinct_validator_count: usize,
}
