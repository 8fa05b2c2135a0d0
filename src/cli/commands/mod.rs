//! Subcommand handlers

pub mod config;
pub mod install;
pub mod settings;
