#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod controller;
mod dual_stake;
mod events;
mod storage;

pub use contract::*;
pub use storage::{Config, PendingRewards, RewardPolicy, StakePosition, TotalStaked};

#[cfg(test)]
mod tests;
