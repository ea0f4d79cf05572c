pub mod helpers;
pub mod memo;
