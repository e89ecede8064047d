//! The vesting schedule abstractions.

#![cfg_attr(not(feature = "std"), no_std)]

mod traits;

pub use traits::*;
