//! Command grammar tree and dispatch.
//!
//! A deliberately small dispatcher: every command is a root literal node
//! with literal and argument children. Input is split on whitespace and
//! walked from the root, literals taking precedence over arguments. The
//! node reached when input runs out must carry an executor.
//!
//! Registering a root name twice merges the two trees; on conflict the
//! later executor, requirement and description win.

use super::context::{ArgumentValue, CommandContext};
use crate::error::{CommandResult, DispatchError};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Callback run when input resolves to a node.
pub type Executor<S> = Arc<dyn Fn(&CommandContext<'_, S>) -> CommandResult + Send + Sync>;

/// Predicate deciding whether a source may use a node.
pub type Requirement<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// How an argument token is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// A single whitespace-free token.
    Word,
    /// A signed integer within `min..=max`.
    Integer { min: i64, max: i64 },
    /// Exactly one character.
    Char,
    /// Everything up to the end of input. Must be a leaf.
    GreedyString,
}

impl ArgumentKind {
    fn parse(self, token: &str) -> Result<ArgumentValue, String> {
        match self {
            Self::Word => Ok(ArgumentValue::Word(token.to_string())),
            Self::Integer { min, max } => {
                let n: i64 = token
                    .parse()
                    .map_err(|_| format!("expected an integer, got {:?}", token))?;
                if n < min || n > max {
                    return Err(format!("{} is outside {}..={}", n, min, max));
                }
                Ok(ArgumentValue::Integer(n))
            }
            Self::Char => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(ArgumentValue::Char(c)),
                    _ => Err(format!("expected a single character, got {:?}", token)),
                }
            }
            Self::GreedyString => Ok(ArgumentValue::Text(token.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Literal,
    Argument(ArgumentKind),
}

/// One node of a command grammar.
pub struct CommandNode<S> {
    name: String,
    kind: NodeKind,
    description: Option<String>,
    children: Vec<CommandNode<S>>,
    executor: Option<Executor<S>>,
    requirement: Option<Requirement<S>>,
}

/// Start a literal node matching `name` exactly.
pub fn literal<S>(name: impl Into<String>) -> CommandNode<S> {
    CommandNode::new(name.into(), NodeKind::Literal)
}

/// Start an argument node stored under `name`.
pub fn argument<S>(name: impl Into<String>, kind: ArgumentKind) -> CommandNode<S> {
    CommandNode::new(name.into(), NodeKind::Argument(kind))
}

impl<S> CommandNode<S> {
    fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            description: None,
            children: Vec::new(),
            executor: None,
            requirement: None,
        }
    }

    /// Attach a child node.
    pub fn then(mut self, child: CommandNode<S>) -> Self {
        self.add_child(child);
        self
    }

    /// Run `f` when input ends at this node.
    pub fn executes<F>(mut self, f: F) -> Self
    where
        F: Fn(&CommandContext<'_, S>) -> CommandResult + Send + Sync + 'static,
    {
        self.executor = Some(Arc::new(f));
        self
    }

    /// Only let sources satisfying `f` through this node.
    #[allow(dead_code)]
    pub fn requires<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.requirement = Some(Arc::new(f));
        self
    }

    /// Human-readable description, shown by help listings.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Same tree under another name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_executable(&self) -> bool {
        self.executor.is_some()
    }

    fn is_literal(&self) -> bool {
        self.kind == NodeKind::Literal
    }

    fn can_use(&self, source: &S) -> bool {
        self.requirement.as_ref().map_or(true, |req| req(source))
    }

    fn add_child(&mut self, child: CommandNode<S>) {
        match self
            .children
            .iter_mut()
            .find(|c| c.name == child.name && c.kind == child.kind)
        {
            Some(existing) => existing.merge(child),
            None => self.children.push(child),
        }
    }

    fn merge(&mut self, other: CommandNode<S>) {
        if other.executor.is_some() {
            self.executor = other.executor;
        }
        if other.requirement.is_some() {
            self.requirement = other.requirement;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        for child in other.children {
            self.add_child(child);
        }
    }

    fn validate(&self) -> Result<(), DispatchError> {
        let invalid = |reason| DispatchError::InvalidNode {
            node: self.name.clone(),
            reason,
        };
        if self.name.is_empty() {
            return Err(invalid("empty name"));
        }
        if self.name.contains(char::is_whitespace) {
            return Err(invalid("name contains whitespace"));
        }
        if self.kind == NodeKind::Argument(ArgumentKind::GreedyString) && !self.children.is_empty()
        {
            return Err(invalid("greedy argument cannot have children"));
        }
        if self.children.is_empty() && self.executor.is_none() {
            return Err(invalid("leaf node has no executor"));
        }
        self.children.iter().try_for_each(CommandNode::validate)
    }

    fn display_name(&self) -> String {
        match self.kind {
            NodeKind::Literal => self.name.clone(),
            NodeKind::Argument(ArgumentKind::GreedyString) => format!("<{}...>", self.name),
            NodeKind::Argument(_) => format!("<{}>", self.name),
        }
    }

    fn usage(&self) -> String {
        let own = self.display_name();
        let tail = match self.children.as_slice() {
            [] => return own,
            [only] => only.usage(),
            many => format!(
                "({})",
                many.iter()
                    .map(CommandNode::display_name)
                    .collect::<Vec<_>>()
                    .join("|")
            ),
        };
        if self.is_executable() {
            format!("{} [{}]", own, tail)
        } else {
            format!("{} {}", own, tail)
        }
    }
}

impl<S> Clone for CommandNode<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            description: self.description.clone(),
            children: self.children.clone(),
            executor: self.executor.clone(),
            requirement: self.requirement.clone(),
        }
    }
}

impl<S> fmt::Debug for CommandNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("children", &self.children)
            .field("executable", &self.is_executable())
            .finish()
    }
}

/// Splits input into whitespace-separated tokens, remembering the remainder.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Next token, and the input starting at that token.
    fn next_token(&mut self) -> Option<(&'a str, &'a str)> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.rest = &rest[end..];
        Some((&rest[..end], rest))
    }

    fn consume_all(&mut self) {
        self.rest = "";
    }
}

/// Registry of command grammars, generic over the command source type.
pub struct CommandDispatcher<S> {
    roots: BTreeMap<String, CommandNode<S>>,
}

impl<S> CommandDispatcher<S> {
    pub fn new() -> Self {
        Self {
            roots: BTreeMap::new(),
        }
    }

    /// Attach a root literal and its subtree.
    pub fn register(&mut self, node: CommandNode<S>) -> Result<(), DispatchError> {
        if !node.is_literal() {
            return Err(DispatchError::InvalidNode {
                node: node.name,
                reason: "root must be a literal",
            });
        }
        node.validate()?;

        match self.roots.get_mut(&node.name) {
            Some(existing) => {
                debug!(command = %node.name, "Merging duplicate command registration");
                existing.merge(node);
            }
            None => {
                debug!(command = %node.name, "Registered command");
                self.roots.insert(node.name.clone(), node);
            }
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Registered root names, sorted.
    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&CommandNode<S>> {
        self.roots.get(name)
    }

    /// One-line usage of a command, e.g. `stats [<limit>]`.
    pub fn usage(&self, name: &str) -> Option<String> {
        self.roots.get(name).map(CommandNode::usage)
    }

    /// Parse `input` (without trigger character) and run the matching executor.
    pub fn execute(&self, input: &str, source: &S) -> Result<(), DispatchError> {
        let mut tokens = Tokens { rest: input };
        let (command, _) = tokens
            .next_token()
            .ok_or_else(|| DispatchError::UnknownCommand(String::new()))?;
        let root = self
            .roots
            .get(command)
            .ok_or_else(|| DispatchError::UnknownCommand(command.to_string()))?;
        if !root.can_use(source) {
            return Err(DispatchError::PermissionDenied(command.to_string()));
        }

        let mut args = HashMap::new();
        let mut node = root;
        while let Some((token, remainder)) = tokens.next_token() {
            if let Some(child) = node
                .children
                .iter()
                .find(|c| c.is_literal() && c.name == token)
            {
                if !child.can_use(source) {
                    return Err(DispatchError::PermissionDenied(command.to_string()));
                }
                node = child;
                continue;
            }

            let mut last_error = None;
            let mut matched = None;
            for child in node.children.iter().filter(|c| !c.is_literal()) {
                let NodeKind::Argument(kind) = child.kind else {
                    continue;
                };
                let raw = if kind == ArgumentKind::GreedyString {
                    remainder.trim_end()
                } else {
                    token
                };
                match kind.parse(raw) {
                    Ok(value) if child.can_use(source) => {
                        if kind == ArgumentKind::GreedyString {
                            tokens.consume_all();
                        }
                        matched = Some((child, value));
                        break;
                    }
                    Ok(_) => {
                        last_error = Some(DispatchError::PermissionDenied(command.to_string()))
                    }
                    Err(reason) => {
                        last_error = Some(DispatchError::InvalidArgument {
                            name: child.name.clone(),
                            reason,
                        })
                    }
                }
            }

            match matched {
                Some((child, value)) => {
                    args.insert(child.name.clone(), value);
                    node = child;
                }
                None => {
                    return Err(last_error
                        .unwrap_or_else(|| DispatchError::UnexpectedArgument(token.to_string())))
                }
            }
        }

        let executor = node
            .executor
            .as_ref()
            .ok_or_else(|| DispatchError::IncompleteCommand(root.usage()))?;
        let ctx = CommandContext::new(source, args, self);
        executor(&ctx).map_err(DispatchError::Command)
    }
}

impl<S> Default for CommandDispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A dispatcher shared between the input loop and late registrations.
///
/// Registration takes the write lock; dispatch holds the read lock for the
/// duration of one command.
pub struct SharedDispatcher<S> {
    inner: Arc<RwLock<CommandDispatcher<S>>>,
}

impl<S> SharedDispatcher<S> {
    pub fn new(dispatcher: CommandDispatcher<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }

    /// Run `f` with exclusive access, e.g. to let a command register itself.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut CommandDispatcher<S>) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, CommandDispatcher<S>> {
        self.inner.read()
    }
}

impl<S> Clone for SharedDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
