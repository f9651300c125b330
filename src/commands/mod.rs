//! Command implementations.
//!
//! Each builtin lives in its own module and implements [`Command`]. The
//! [`Registry`] constructs them all once at startup.

pub mod core;

mod help;
mod prefix;
mod say;
mod stats;
mod version;

pub use self::core::{CommandDispatcher, CommandSource, Outcome, Registry, SharedDispatcher};
pub use help::HelpCommand;
pub use prefix::PrefixCommand;
pub use say::SayCommand;
pub use stats::StatsCommand;
pub use version::VersionCommand;
