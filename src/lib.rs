#![cfg_attr(not(feature = "std"), no_std)]

//! Rules engine for a single Battleship board: ship placement on a 10×10
//! grid and attack resolution.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod render;
mod ship;
#[cfg(feature = "std")]
pub mod snapshot;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
#[cfg(feature = "std")]
pub use snapshot::{BoardState, CellRecord, ShipRecord};
