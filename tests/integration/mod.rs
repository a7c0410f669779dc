//! Integration tests for sortrace
//!
//! These tests verify that recorder, algorithms, driver and UI work together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod app_flow;
pub mod race_flow;
