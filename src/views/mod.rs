pub mod staking_summary;
