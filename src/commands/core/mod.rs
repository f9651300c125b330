//! Core command infrastructure.
//!
//! This module contains the fundamental types for the command system:
//!
//! - [`Command`]: the contract every command implements (identity plus
//!   grammar registration)
//! - [`CommandDispatcher`]: the grammar tree commands attach to, and the
//!   parser that routes input to executors
//! - [`Registry`]: owns the command instances, registers them at startup
//!   and routes prefixed input lines
//! - [`CommandSource`]: who a command runs for, and where replies go

pub mod context;
pub mod dispatcher;
pub mod registry;
pub mod source;
pub mod traits;

// Re-export commonly used types
pub use context::CommandContext;
pub use dispatcher::{ArgumentKind, CommandDispatcher, SharedDispatcher, argument, literal};
pub use registry::{CommandStats, Outcome, Registry};
pub use source::CommandSource;
pub use traits::{Command, CommandInfo};
