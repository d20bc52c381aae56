//! Advent Doors CLI library.
//!
//! This crate provides the `advent` command-line interface: loading a
//! calendar, opening doors, and inspecting or clearing local reveal state.

pub mod cli;
pub mod commands;
