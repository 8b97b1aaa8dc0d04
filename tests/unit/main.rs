//! Unit test modules.

#[path = "../common/mock_platform.rs"]
mod mock_platform;

mod registry_test;
