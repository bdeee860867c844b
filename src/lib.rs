//! Value adjusters for small embedded menu displays.
//!
//! A widget shows one value (bool, number, option, date, time), reacts to
//! a scroll delta from a rotary encoder or UP/DOWN buttons, and commits on
//! click. Everything here is `no_std`, allocation-free, and runs on the
//! host for testing.
//!
//! Usage: `cargo test` (host) or `cargo build --release --features embedded
//! --target thumbv7em-none-eabihf` (firmware demo).
//!
//! ```
//! use menu_adjust::adjust::{Adjust, NumberAdjust};
//!
//! let mut volume = NumberAdjust::new("Volume", 5, Some(0), Some(10)).unwrap();
//! volume.scroll(20);
//! assert_eq!(volume.value(), 10);
//! assert!(!volume.click());
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod adjust;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;

pub use adjust::{
    Adjust, BoolAdjust, DateAdjust, NumberAdjust, OnCommit, OptionAdjust, Render, TextField,
    TimeAdjust,
};
pub use error::Error;
pub use session::Session;
pub use ui::InputEvent;
