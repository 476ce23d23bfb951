//! Item assembly and player configuration.

pub mod assembler;
pub mod config;
