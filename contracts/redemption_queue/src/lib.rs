#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod controller;
mod events;
mod redemption_queue;
mod storage;

pub use contract::*;
pub use storage::{DailyVolume, QueueConfig, RedemptionRequest, RequestKind, RequestState};
