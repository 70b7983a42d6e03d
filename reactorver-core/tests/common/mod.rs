//! Common test utilities for reactorver-core

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
