use crate::error::FetchError;
use crate::models::amount_serde::{deserialize_amount, deserialize_optional_amount};
use crate::models::{DelegationRecord, StakeStatus};
use async_trait::async_trait;
use log::{error, info, warn};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{json, Value};

const GET_STAKES_METHOD: &str = "suix_getStakes";
const GET_SYSTEM_STATE_METHOD: &str = "suix_getLatestSuiSystemState";

/// Where the staking screen gets its data from.
#[async_trait]
pub trait StakingDataSource: Send + Sync {
    async fn get_delegations(&self, owner: &str) -> Result<Vec<DelegationRecord>, FetchError>;
    async fn get_validator_state(&self) -> Result<Value, FetchError>;
}

pub struct RpcNodeClient {
    http: reqwest::Client,
    primary_rpc: String,
    secondary_rpc: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DelegatedStake {
    validator_address: String,
    stakes: Vec<StakeObject>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StakeObject {
    staked_sui_id: String,
    #[serde(deserialize_with = "deserialize_amount")]
    principal: BigInt,
    #[serde(default)]
    stake_request_epoch: Option<Value>,
    #[serde(default)]
    status: StakeStatus,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    estimated_reward: Option<BigInt>,
}

pub fn create_node_connections(primary_rpc: &str, secondary_rpc: &str) -> RpcNodeClient {
    info!("Connecting to node RPC...");
    let client = RpcNodeClient {
        http: reqwest::Client::new(),
        primary_rpc: primary_rpc.to_string(),
        secondary_rpc: secondary_rpc.to_string(),
    };
    info!("Node connections configured");
    client
}

impl RpcNodeClient {
    pub async fn query_rpc(&self, method: &str, params: Value) -> Result<Value, FetchError> {
        info!("Querying RPC: {}", method);
        match self.call(&self.primary_rpc, method, &params).await {
            Ok(response) => {
                info!("RPC query successful on primary: {}", method);
                Ok(response)
            }
            Err(e) => {
                warn!("Primary RPC failed ({}), trying secondary", e);
                match self.call(&self.secondary_rpc, method, &params).await {
                    Ok(response) => {
                        info!("RPC query successful on secondary: {}", method);
                        Ok(response)
                    }
                    Err(e) => {
                        error!("Both RPCs failed: {:?}", e);
                        Err(e)
                    }
                }
            }
        }
    }

    async fn call(&self, url: &str, method: &str, params: &Value) -> Result<Value, FetchError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let envelope: Value = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode_response(envelope)
    }
}

#[async_trait]
impl StakingDataSource for RpcNodeClient {
    async fn get_delegations(&self, owner: &str) -> Result<Vec<DelegationRecord>, FetchError> {
        info!("Fetching delegations for {}", owner);
        let result = self.query_rpc(GET_STAKES_METHOD, json!([owner])).await?;
        let records = flatten_stakes(result)?;
        info!("Fetched {} delegations for {}", records.len(), owner);
        Ok(records)
    }

    async fn get_validator_state(&self) -> Result<Value, FetchError> {
        self.query_rpc(GET_SYSTEM_STATE_METHOD, json!([])).await
    }
}

fn decode_response(mut envelope: Value) -> Result<Value, FetchError> {
    if let Some(err) = envelope.get("error") {
        return Err(FetchError::Rpc {
            code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }
    match envelope.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(FetchError::Decode(format!(
            "response has neither result nor error: {}",
            envelope
        ))),
    }
}

/// The node groups stakes per validator; the screen wants one record per stake.
fn flatten_stakes(result: Value) -> Result<Vec<DelegationRecord>, FetchError> {
    let groups: Vec<DelegatedStake> =
        serde_json::from_value(result).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut records = Vec::new();
    for group in groups {
        for stake in group.stakes {
            let stake_request_epoch = match &stake.stake_request_epoch {
                Some(Value::String(s)) => s.parse().ok(),
                Some(Value::Number(n)) => n.as_u64(),
                _ => None,
            };
            if stake.stake_request_epoch.is_some() && stake_request_epoch.is_none() {
                warn!(
                    "Ignoring unreadable stake request epoch for {}",
                    stake.staked_sui_id
                );
            }
            records.push(DelegationRecord {
                id: stake.staked_sui_id,
                validator_address: group.validator_address.clone(),
                staked_principal: stake.principal,
                stake_request_epoch,
                status: stake.status,
                estimated_reward: stake.estimated_reward,
            });
        }
    }
    Ok(records)
}
