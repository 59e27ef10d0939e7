#![no_std]

mod accounting;
mod authorities;
mod checkpoints;
mod events;
mod fees;

pub mod errors;
pub mod interfaces;
pub mod locker;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use crate::errors::LockerError;
pub use crate::fees::{ALT_FEE_KEY, NATIVE_FEE_KEY, TRANSFER_SHARE_FEE_KEY};
pub use crate::locker::{LockerContract, LockerContractClient};
pub use crate::types::{AssetRef, Checkpoint, LockerInfo};
