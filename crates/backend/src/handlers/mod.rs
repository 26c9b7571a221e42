pub mod stats;
pub mod vacation;
