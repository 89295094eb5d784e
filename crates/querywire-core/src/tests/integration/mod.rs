#![cfg(test)]

pub mod common;
pub mod kernel_tests;
pub mod wiring_tests;
