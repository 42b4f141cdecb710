//! Test modules for the prefix index application.
//!
//! Component unit tests live beside their code. This module holds the
//! cross-component tests that need filesystem or environment fixtures:
//! - Configuration loading and validation
//! - Dataset loading through configured indexes

pub mod config_tests;

pub use test_utils::TestFixture;
