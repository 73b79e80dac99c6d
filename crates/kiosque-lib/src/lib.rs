#[macro_use]
extern crate log;

pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod models;
pub mod route;
pub mod sequence;
pub mod view;
