#![doc = include_str!("../README.md")]

mod common;
pub use common::*;

pub mod signal;
pub mod telemetry;
