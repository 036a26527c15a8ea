//! Listing layer for pony and balloon art collections.
//!
//! Ponyls renders resource directories as terminal-width-aware multi-column
//! grids. The binary is the product; the library API is not stable.

pub mod config;
pub mod resources;
pub mod styling;

// Note: display and commands modules are used by main.rs but not exposed as
// public API
