use crate::error::ParseError;
use crate::models::{EpochInfo, Validator, ValidatorSet};
use chrono::{TimeZone, Utc};
use log::info;
use serde_json::Value;

pub fn parse_validator_state(raw: &Value) -> Result<ValidatorSet, ParseError> {
    let epoch = u64_field(raw, "epoch")?;
    let start_ms = u64_field(raw, "epochStartTimestampMs")?;
    let epoch_start = Utc
        .timestamp_millis_opt(start_ms as i64)
        .single()
        .ok_or_else(|| ParseError::InvalidField {
            field: "epochStartTimestampMs".to_string(),
            value: start_ms.to_string(),
        })?;

    let active_validators = raw
        .get("activeValidators")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::MissingField("activeValidators".to_string()))?
        .iter()
        .map(parse_validator)
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Parsed {} active validators at epoch {}",
        active_validators.len(),
        epoch
    );

    Ok(ValidatorSet {
        epoch: EpochInfo { epoch, epoch_start },
        active_validators,
    })
}

fn parse_validator(raw: &Value) -> Result<Validator, ParseError> {
    Ok(Validator {
        address: str_field(raw, "suiAddress")?,
        name: str_field(raw, "name")?,
        apy: raw.get("apy").and_then(Value::as_f64),
    })
}

fn field<'a>(raw: &'a Value, name: &str) -> Result<&'a Value, ParseError> {
    match raw.get(name) {
        Some(Value::Null) | None => Err(ParseError::MissingField(name.to_string())),
        Some(value) => Ok(value),
    }
}

fn str_field(raw: &Value, name: &str) -> Result<String, ParseError> {
    let value = field(raw, name)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(name, value))
}

// Numeric fields arrive either as JSON numbers or as decimal strings.
fn u64_field(raw: &Value, name: &str) -> Result<u64, ParseError> {
    let value = field(raw, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(name, value))
}

fn invalid(name: &str, value: &Value) -> ParseError {
    ParseError::InvalidField {
        field: name.to_string(),
        value: value.to_string(),
    }
}
