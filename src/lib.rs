// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod fetch;
pub mod file;
pub mod frame;
pub mod gui;
pub mod model;
pub mod progress;
pub mod store;
