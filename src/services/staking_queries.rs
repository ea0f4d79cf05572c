use crate::error::FetchError;
use crate::models::{DelegationRecord, ValidatorSet};
use crate::services::node_rpc::StakingDataSource;
use crate::services::validator_parser::parse_validator_state;
use log::{info, warn};
use std::sync::Arc;

/// Fetch status of one resource. `version` changes exactly when `data` is replaced.
/// A query that has never resolved counts as loading.
#[derive(Debug)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub version: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
            version: 0,
        }
    }
}

impl<T> QueryState<T> {
    #[cfg(test)]
    pub fn loaded(data: T) -> Self {
        Self {
            data: Some(Arc::new(data)),
            is_loading: false,
            error: None,
            version: 1,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    fn start(&mut self) {
        self.is_loading = true;
    }

    fn resolve(&mut self, result: Result<T, FetchError>) {
        self.is_loading = false;
        match result {
            Ok(data) => {
                self.data = Some(Arc::new(data));
                self.error = None;
                self.version += 1;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Delegation and validator queries for one account.
pub struct StakingQueries {
    source: Arc<dyn StakingDataSource>,
    owner: String,
    pub delegations: QueryState<Vec<DelegationRecord>>,
    pub validators: QueryState<ValidatorSet>,
}

impl StakingQueries {
    pub fn new(source: Arc<dyn StakingDataSource>, owner: &str) -> Self {
        Self {
            source,
            owner: owner.to_string(),
            delegations: QueryState::default(),
            validators: QueryState::default(),
        }
    }

    pub async fn refresh(&mut self) {
        self.delegations.start();
        self.validators.start();

        let (delegations, validator_state) = futures::join!(
            self.source.get_delegations(&self.owner),
            self.source.get_validator_state()
        );
        let validators = validator_state
            .and_then(|raw| parse_validator_state(&raw).map_err(FetchError::from));

        if let Err(e) = &delegations {
            warn!("Failed to fetch delegations for {}: {}", self.owner, e);
        }
        if let Err(e) = &validators {
            warn!("Failed to fetch validator state: {}", e);
        }

        self.delegations.resolve(delegations);
        self.validators.resolve(validators);
        info!(
            "Staking queries refreshed (delegations v{}, validators v{})",
            self.delegations.version, self.validators.version
        );
    }
}
