use crate::{FlowStore, NodeError, ValueKind};
use async_trait::async_trait;

/// Core trait for units of work that share a [`FlowStore`].
///
/// Implements the three-phase lifecycle:
/// 1. `prepare()` - preparation and validation
/// 2. `execute()` - main logic
/// 3. `finalize()` - cleanup and formatting
///
/// Only `execute` is mandatory; the other phases default to leaving the
/// store untouched. Callers drive a node through [`Node::run`], which
/// applies the phase ordering and the error-capture policy uniformly.
#[async_trait]
pub trait Node: Send + Sync {
    /// Node name used for logging and the `error_node` marker.
    ///
    /// Defaults to the concrete type's label.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("node")
    }

    /// Preparation phase - validate inputs and set up state.
    ///
    /// Override to check preconditions; set the error action on the
    /// store to skip execution without raising.
    async fn prepare(&self, _store: &mut FlowStore) -> Result<(), NodeError> {
        Ok(())
    }

    /// Execution phase - main logic. Every node must implement this.
    async fn execute(&self, store: &mut FlowStore) -> Result<(), NodeError>;

    /// Finalization phase - cleanup and output formatting.
    ///
    /// Runs after both successful and errored preparation, so overrides
    /// must tolerate either shape of store.
    async fn finalize(&self, _store: &mut FlowStore) -> Result<(), NodeError> {
        Ok(())
    }

    /// Execute the complete lifecycle: prepare, execute, finalize.
    ///
    /// `execute` is skipped when the store already carries the error
    /// action; `finalize` always runs. Any phase fault is captured into
    /// the store (`action = "error"`, `error`, `error_node`) instead of
    /// propagating, and the remaining phases are skipped. The one
    /// exception is [`NodeError::Cancelled`], which propagates unchanged
    /// so shutdown is not mistaken for a logic fault.
    async fn run(&self, store: &mut FlowStore) -> Result<(), NodeError> {
        tracing::info!(node = self.name(), "running node");

        let outcome = async {
            self.prepare(store).await?;

            if !store.is_errored() {
                self.execute(store).await?;
            }

            self.finalize(store).await
        }
        .await;

        match outcome {
            Ok(()) => {
                tracing::info!(
                    node = self.name(),
                    action = store.action().unwrap_or("none"),
                    "completed node"
                );
                Ok(())
            }
            Err(NodeError::Cancelled) => Err(NodeError::Cancelled),
            Err(e) => {
                tracing::error!(node = self.name(), error = %e, "node failed");
                store.fail(self.name(), e.to_string());
                Ok(())
            }
        }
    }
}

/// Common validation patterns available to any node.
///
/// Both checks are passive: they report a problem as an `Err` message
/// and leave acting on it (typically setting the error action) to the
/// caller.
pub trait Validate: Node {
    /// Check that every key in `required` exists in the store
    fn validate_required_keys(
        &self,
        store: &FlowStore,
        required: &[&str],
    ) -> Result<(), String> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| !store.contains_key(key))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing required keys: {}", missing.join(", ")))
        }
    }

    /// Check that present keys hold values of the expected kind.
    ///
    /// Absent keys are ignored; pair with `validate_required_keys` when
    /// presence is also required.
    fn validate_value_kinds(
        &self,
        store: &FlowStore,
        expected: &[(&str, ValueKind)],
    ) -> Result<(), String> {
        for (key, kind) in expected {
            if let Some(value) = store.get(key) {
                if value.kind() != *kind {
                    return Err(format!(
                        "Key '{}' must be {}, got {}",
                        key,
                        kind,
                        value.kind()
                    ));
                }
            }
        }

        Ok(())
    }
}

impl<T: Node + ?Sized> Validate for T {}
