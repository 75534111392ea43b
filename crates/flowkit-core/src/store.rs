use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved key holding the next transition action, or [`ERROR_ACTION`]
pub const ACTION_KEY: &str = "action";
/// Reserved key holding the failure message after an errored run
pub const ERROR_KEY: &str = "error";
/// Reserved key holding the name of the node that failed
pub const ERROR_NODE_KEY: &str = "error_node";
/// Sentinel action value signalling that a prior phase failed
pub const ERROR_ACTION: &str = "error";

/// Shared state passed through a node's lifecycle phases.
///
/// A `FlowStore` is created by the caller, handed to [`Node::run`], mutated
/// in place by each phase, and returned to the caller. Nodes may add
/// arbitrary keys; only the `action` / `error` / `error_node` convention
/// is reserved.
///
/// [`Node::run`]: crate::Node::run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FlowStore {
    entries: HashMap<String, Value>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Current action value, if one has been set
    pub fn action(&self) -> Option<&str> {
        self.get(ACTION_KEY).and_then(|v| v.as_str())
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.insert(ACTION_KEY, action.into());
    }

    /// Whether a prior phase has stamped the error sentinel
    pub fn is_errored(&self) -> bool {
        self.action() == Some(ERROR_ACTION)
    }

    /// Record a failure: sets the error action, the message, and the
    /// name of the failing node
    pub fn fail(&mut self, node: impl Into<String>, message: impl Into<String>) {
        self.set_action(ERROR_ACTION);
        self.insert(ERROR_KEY, message.into());
        self.insert(ERROR_NODE_KEY, node.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.get(ERROR_KEY).and_then(|v| v.as_str())
    }

    pub fn error_node(&self) -> Option<&str> {
        self.get(ERROR_NODE_KEY).and_then(|v| v.as_str())
    }

    /// Serialize the store for persistence alongside flow data
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FromIterator<(String, Value)> for FlowStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
