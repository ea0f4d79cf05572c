use crate::models::amount_serde::{
    deserialize_amount, deserialize_optional_amount, serialize_amount, serialize_optional_amount,
};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StakeStatus {
    #[default]
    Active,
    Pending,
    Unstaked,
}

/// One staked object owned by the account, assigned to a single validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationRecord {
    pub id: String,
    pub validator_address: String,
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "deserialize_amount"
    )]
    pub staked_principal: BigInt,
    #[serde(default)]
    pub stake_request_epoch: Option<u64>,
    #[serde(default)]
    pub status: StakeStatus,
    /// Reward accrued since activation, as reported by the node for active stakes.
    #[serde(
        default,
        serialize_with = "serialize_optional_amount",
        deserialize_with = "deserialize_optional_amount"
    )]
    pub estimated_reward: Option<BigInt>,
}

impl DelegationRecord {
    pub fn new(id: &str, validator_address: &str, staked_principal: impl Into<BigInt>) -> Self {
        Self {
            id: id.to_string(),
            validator_address: validator_address.to_string(),
            staked_principal: staked_principal.into(),
            stake_request_epoch: None,
            status: StakeStatus::Active,
            estimated_reward: None,
        }
    }

    pub fn with_estimated_reward(mut self, reward: impl Into<BigInt>) -> Self {
        self.estimated_reward = Some(reward.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_principal_from_string_and_number() {
        let raw = r#"[
            {"id": "0x1", "validatorAddress": "V1", "stakedPrincipal": "1152921504606846977"},
            {"id": "0x2", "validatorAddress": "V2", "stakedPrincipal": 42, "status": "Pending"},
            {"id": "0x3", "validatorAddress": "V2", "stakedPrincipal": "7", "estimatedReward": "3"}
        ]"#;
        let records: Vec<DelegationRecord> = serde_json::from_str(raw).unwrap();

        assert_eq!(
            records[0].staked_principal,
            BigInt::from(1_152_921_504_606_846_977u64)
        );
        assert_eq!(records[0].status, StakeStatus::Active);
        assert_eq!(records[0].estimated_reward, None);
        assert_eq!(records[1].staked_principal, BigInt::from(42));
        assert_eq!(records[1].status, StakeStatus::Pending);
        assert_eq!(records[2].estimated_reward, Some(BigInt::from(3)));
    }

    #[test]
    fn serializes_amounts_as_strings() {
        let record = DelegationRecord::new("0x1", "V1", 350)
            .with_estimated_reward(12);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["stakedPrincipal"], "350");
        assert_eq!(json["estimatedReward"], "12");

        let json = serde_json::to_value(DelegationRecord::new("0x2", "V1", 1)).unwrap();
        assert!(json["estimatedReward"].is_null());
    }
}
