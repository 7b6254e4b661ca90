#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
pub use mocks::*;
pub use test_server::*;
