use crate::models::{AggregateSummary, EpochInfo};
use crate::services::delegation_aggregator::DelegationAggregator;
use crate::services::feature_flags::{FeatureFlags, STAKE_BUTTON_FLAG};
use crate::services::rewards::RewardLookup;
use crate::services::staking_queries::StakingQueries;
use crate::utils::helpers::format_amount;
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::fmt;

pub const NEW_STAKE_HREF: &str = "/stake/new";

#[derive(Debug, Clone, PartialEq)]
pub struct StakeCard {
    pub id: String,
    pub validator_name: String,
    pub validator_apy: Option<f64>,
    pub principal: BigInt,
    pub reward: f64,
    pub since_epoch: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeLink {
    pub href: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StakingSummary {
    pub summary: AggregateSummary,
    pub cards: Vec<StakeCard>,
    pub stake_link: StakeLink,
    pub epoch: Option<EpochInfo>,
    pub decimals: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StakingSummaryView {
    Loading,
    /// Shown as an alert carrying the fetch error's message.
    Error { message: String },
    Loaded(StakingSummary),
}

pub struct StakingSummaryScreen<R> {
    aggregator: DelegationAggregator<R>,
    flags: Box<dyn FeatureFlags>,
    decimals: u32,
}

impl<R: RewardLookup> StakingSummaryScreen<R> {
    pub fn new(rewards: R, flags: Box<dyn FeatureFlags>, decimals: u32) -> Self {
        Self {
            aggregator: DelegationAggregator::new(rewards),
            flags,
            decimals,
        }
    }

    pub fn view(&mut self, queries: &StakingQueries) -> StakingSummaryView {
        let delegations = &queries.delegations;
        let validators = &queries.validators;

        if let Some(message) = &delegations.error {
            return StakingSummaryView::Error {
                message: message.clone(),
            };
        }
        // Without data and without an error the first fetch has not finished.
        let Some(records) = &delegations.data else {
            return StakingSummaryView::Loading;
        };

        let summary = self.aggregator.summary(delegations, validators);
        let active = validators
            .data
            .as_ref()
            .map(|set| set.active_validators.as_slice())
            .unwrap_or_default();
        let cards = records
            .iter()
            .map(|record| {
                let validator = validators
                    .data
                    .as_ref()
                    .and_then(|set| set.find(&record.validator_address));
                StakeCard {
                    id: record.id.clone(),
                    validator_name: validator
                        .map(|v| v.name.clone())
                        .unwrap_or_else(|| record.validator_address.clone()),
                    validator_apy: validator.and_then(|v| v.apy),
                    principal: record.staked_principal.clone(),
                    reward: self.aggregator.reward_lookup().reward(active, record),
                    since_epoch: record.stake_request_epoch,
                }
            })
            .collect();

        StakingSummaryView::Loaded(StakingSummary {
            summary,
            cards,
            stake_link: StakeLink {
                href: NEW_STAKE_HREF,
                enabled: self.flags.is_enabled(STAKE_BUTTON_FLAG),
            },
            epoch: validators.data.as_ref().map(|set| set.epoch.clone()),
            decimals: self.decimals,
        })
    }
}

fn format_reward(reward: f64, decimals: u32) -> String {
    let whole = BigInt::from_f64(reward.trunc()).unwrap_or_default();
    format_amount(&whole, decimals)
}

impl fmt::Display for StakingSummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakingSummaryView::Loading => writeln!(f, "Loading..."),
            StakingSummaryView::Error { message } => writeln!(f, "Error: {}", message),
            StakingSummaryView::Loaded(view) => {
                let summary = &view.summary;
                if let Some(epoch) = &view.epoch {
                    writeln!(
                        f,
                        "Epoch {} (started {})",
                        epoch.epoch,
                        epoch.epoch_start.format("%Y-%m-%d %H:%M UTC")
                    )?;
                }
                writeln!(
                    f,
                    "Staking on {} validator{}",
                    summary.distinct_validator_count,
                    if summary.distinct_validator_count == 1 { "" } else { "s" }
                )?;
                writeln!(
                    f,
                    "Total staked: {}",
                    format_amount(&summary.total_stake, view.decimals)
                )?;
                writeln!(
                    f,
                    "Rewards earned: {}",
                    format_reward(summary.total_rewards, view.decimals)
                )?;
                for card in &view.cards {
                    write!(
                        f,
                        "  {}  {} (+{})",
                        card.validator_name,
                        format_amount(&card.principal, view.decimals),
                        format_reward(card.reward, view.decimals)
                    )?;
                    if let Some(epoch) = card.since_epoch {
                        write!(f, " since epoch {}", epoch)?;
                    }
                    if let Some(apy) = card.validator_apy {
                        write!(f, " APY {:.2}%", apy * 100.0)?;
                    }
                    writeln!(f)?;
                }
                let state = if view.stake_link.enabled { "" } else { " (disabled)" };
                writeln!(f, "Stake -> {}{}", view.stake_link.href, state)
            }
        }
    }
}
