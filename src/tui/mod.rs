//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Focus, Action, Transition)
//! - `update`: Pure transitions, key actions → store events
//! - `view`: Pure rendering of the projected view tree
//! - `run`: Effects (terminal, event loop, focus requests)
//! - `theme`: Style constants

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
