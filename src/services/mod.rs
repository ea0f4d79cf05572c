pub mod clipboard;
pub mod delegation_aggregator;
pub mod feature_flags;
pub mod node_rpc;
pub mod rewards;
pub mod staking_queries;
pub mod validator_parser;
