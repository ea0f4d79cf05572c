use crate::utils::helpers::parse_amount;
use num_bigint::BigInt;
use serde::{self, Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Amounts travel as decimal strings so they survive JSON consumers that
/// read numbers as doubles.
pub fn serialize_amount<S>(amount: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&amount.to_string())
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    amount_from_value(&value)?
        .ok_or_else(|| serde::de::Error::custom("expecting amount string or integer"))
}

pub fn serialize_optional_amount<S>(
    amount: &Option<BigInt>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(amount) => serialize_amount(amount, serializer),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    amount_from_value(&value)
}

fn amount_from_value<E: serde::de::Error>(value: &Value) -> Result<Option<BigInt>, E> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(E::custom("expecting amount string or integer")),
    };
    parse_amount(&text).map(Some).map_err(E::custom)
}
