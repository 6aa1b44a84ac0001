#![cfg_attr(not(feature = "use-std"), no_std)]

pub mod hash;

#[cfg(feature = "use-std")]
pub mod nsrl;
