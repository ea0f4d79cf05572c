use crate::error::ConfigError;
use std::env;
use std::str::FromStr;

pub struct Config {
    pub account_address: String,
    pub primary_rpc: String,
    pub secondary_rpc: String,
    pub coin_decimals: u32,
    pub feature_flags: String,
    pub copy_command: String,
    pub copy_address: bool,
    pub copy_success_message: String,
}

#[cfg(target_os = "macos")]
const DEFAULT_COPY_COMMAND: &str = "pbcopy";
#[cfg(not(target_os = "macos"))]
const DEFAULT_COPY_COMMAND: &str = "xclip -selection clipboard";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_address =
            lookup("ACCOUNT_ADDRESS").ok_or(ConfigError::Missing("ACCOUNT_ADDRESS"))?;
        let primary_rpc = lookup("PRIMARY_RPC").ok_or(ConfigError::Missing("PRIMARY_RPC"))?;
        Ok(Self {
            account_address,
            secondary_rpc: lookup("SECONDARY_RPC").unwrap_or_else(|| primary_rpc.clone()),
            primary_rpc,
            coin_decimals: parse_var(&lookup, "COIN_DECIMALS", "9")?,
            feature_flags: lookup("FEATURE_FLAGS").unwrap_or_default(),
            copy_command: lookup("COPY_COMMAND")
                .unwrap_or_else(|| DEFAULT_COPY_COMMAND.to_string()),
            copy_address: parse_var(&lookup, "COPY_ADDRESS", "false")?,
            copy_success_message: lookup("COPY_SUCCESS_MESSAGE")
                .unwrap_or_else(|| "Copied".to_string()),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_ADDRESS", "0xabc"),
            ("PRIMARY_RPC", "http://primary"),
        ]))
        .unwrap();

        assert_eq!(config.secondary_rpc, "http://primary");
        assert_eq!(config.coin_decimals, 9);
        assert!(!config.copy_address);
        assert_eq!(config.copy_success_message, "Copied");
        assert_eq!(config.copy_command, DEFAULT_COPY_COMMAND);
    }

    #[test]
    fn reports_missing_and_invalid_values() {
        let missing = Config::from_lookup(lookup_from(&[("PRIMARY_RPC", "http://primary")]));
        assert_eq!(missing.err(), Some(ConfigError::Missing("ACCOUNT_ADDRESS")));

        let invalid = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_ADDRESS", "0xabc"),
            ("PRIMARY_RPC", "http://primary"),
            ("COIN_DECIMALS", "nine"),
        ]));
        assert_eq!(
            invalid.err(),
            Some(ConfigError::Invalid {
                name: "COIN_DECIMALS",
                value: "nine".to_string()
            })
        );
    }
}
