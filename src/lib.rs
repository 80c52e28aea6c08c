//! An embeddable command processor for interactive "terminal" surfaces.
//!
//! This crate provides the pieces behind a browser-style terminal easter
//! egg: a registry of named commands with synchronous line dispatch, tagged
//! output values the frontend styles by kind, the stock command tables
//! wired in at setup, prefix completion helpers, and the key-sequence
//! detector behind the hidden unlock.
//!
//! The main entry point is [`CommandProcessor`], which dispatches one input
//! line to one [`CommandOutput`] value. Commands reach back into the
//! hosting UI only through closures injected when the tables are built
//! (see [`builtin`]), so the dispatch core stays free of UI concerns.
//! Dispatch is total: every input line maps to exactly one output value,
//! and failures are data, never propagated faults.

pub mod autocomplete;
pub mod builtin;
mod command;
pub mod konami;
mod output;
mod processor;

/// Just a convenient re-export of the core types.
///
/// See [`CommandProcessor`] for the high-level API and examples.
pub use command::{Command, CommandAction};
pub use output::{CommandOutput, Renderable};
pub use processor::CommandProcessor;
