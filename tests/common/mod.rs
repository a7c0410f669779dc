//! Shared test utilities for sortrace

pub mod terminal;
