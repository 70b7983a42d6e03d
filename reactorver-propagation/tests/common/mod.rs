//! Common test utilities for reactorver-propagation

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
