//! Execution context handed to command executors.

use super::dispatcher::CommandDispatcher;
use crate::error::CommandError;
use std::collections::HashMap;

/// A parsed argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    Word(String),
    Integer(i64),
    Char(char),
    Text(String),
}

/// Everything an executor can see about one invocation.
pub struct CommandContext<'a, S> {
    source: &'a S,
    args: HashMap<String, ArgumentValue>,
    dispatcher: &'a CommandDispatcher<S>,
}

impl<'a, S> CommandContext<'a, S> {
    pub(crate) fn new(
        source: &'a S,
        args: HashMap<String, ArgumentValue>,
        dispatcher: &'a CommandDispatcher<S>,
    ) -> Self {
        Self {
            source,
            args,
            dispatcher,
        }
    }

    /// Whoever issued the command.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// The dispatcher running this command.
    pub fn dispatcher(&self) -> &'a CommandDispatcher<S> {
        self.dispatcher
    }

    fn require(&self, name: &str) -> Result<&ArgumentValue, CommandError> {
        self.args
            .get(name)
            .ok_or_else(|| CommandError::MissingArgument(name.to_string()))
    }

    /// A `Word` or greedy `Text` argument.
    pub fn get_string(&self, name: &str) -> Result<String, CommandError> {
        match self.require(name)? {
            ArgumentValue::Word(s) | ArgumentValue::Text(s) => Ok(s.clone()),
            other => Err(mismatch(name, "text", other)),
        }
    }

    pub fn get_integer(&self, name: &str) -> Result<i64, CommandError> {
        match self.require(name)? {
            ArgumentValue::Integer(n) => Ok(*n),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    pub fn get_char(&self, name: &str) -> Result<char, CommandError> {
        match self.require(name)? {
            ArgumentValue::Char(c) => Ok(*c),
            other => Err(mismatch(name, "char", other)),
        }
    }
}

fn mismatch(name: &str, expected: &str, found: &ArgumentValue) -> CommandError {
    CommandError::InvalidValue(format!(
        "argument <{}> is not a {} ({:?})",
        name, expected, found
    ))
}
