//! aelist
//!
//! Interactive terminal launcher: indexes the executables in a set of
//! directories, narrows them by substring as you type and launches the best
//! match as a detached process.
//!
//! Follows a Pure Core / Impure Shell split: `index`, `state` and `model`
//! are plain data and functions, while `view` and `launch` own the terminal
//! and the process table.

pub mod config;
pub mod index;
pub mod launch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
