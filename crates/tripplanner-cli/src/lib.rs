//! Trip planner CLI library.
//!
//! Rendering and terminal helpers shared by the `tripplanner` binary's
//! subcommands.

pub mod output;
pub mod terminal;
