use std::collections::HashSet;

pub const STAKE_BUTTON_FLAG: &str = "stake-button";

pub trait FeatureFlags {
    fn is_enabled(&self, name: &str) -> bool;
}

/// Flags fixed at startup from a comma-separated list.
#[derive(Debug, Default, Clone)]
pub struct StaticFeatureFlags {
    enabled: HashSet<String>,
}

impl StaticFeatureFlags {
    pub fn from_list(list: &str) -> Self {
        Self {
            enabled: list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl FeatureFlags for StaticFeatureFlags {
    fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list() {
        let flags = StaticFeatureFlags::from_list(" stake-button, ,dark-mode ");
        assert!(flags.is_enabled(STAKE_BUTTON_FLAG));
        assert!(flags.is_enabled("dark-mode"));
        assert!(!flags.is_enabled("ledger"));
        assert!(!StaticFeatureFlags::from_list("").is_enabled(STAKE_BUTTON_FLAG));
    }
}
