use crate::Config;
use async_trait::async_trait;
use flowkit_core::{FlowError, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// An orchestrated unit of work registered with the daemon.
///
/// The daemon treats flows as opaque: it tracks them by name and drives
/// the optional initialization hook at startup, nothing more. What a
/// flow computes is entirely up to the implementor.
#[async_trait]
pub trait Flow: Send + Sync {
    /// Run the flow to completion
    async fn run(&self) -> Result<Value, FlowError>;

    /// Optional: prepare resources before the daemon starts idling
    async fn initialize(&self) -> Result<(), FlowError> {
        Ok(())
    }
}

/// Process-lifetime registry of named flows with a start/stop toggle.
///
/// The flow map is guarded for shared access; mutation is expected from
/// a single writer. `start` idles on a cancellation token until `stop`
/// is called, matching a cooperative single-scheduler deployment.
pub struct FlowDaemon {
    config: Config,
    flows: RwLock<HashMap<String, Arc<dyn Flow>>>,
    running: AtomicBool,
    // Replaced with a fresh token on every stop, so start can idle again
    shutdown: Mutex<CancellationToken>,
}

impl FlowDaemon {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            flows: RwLock::new(HashMap::new()),
            running: AtomicBool::new(false),
            shutdown: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a flow under `name`, replacing any existing entry.
    ///
    /// Replacement is silent apart from the log line.
    pub async fn add_flow(&self, name: impl Into<String>, flow: Arc<dyn Flow>) {
        let name = name.into();
        let mut flows = self.flows.write().await;

        if flows.insert(name.clone(), flow).is_some() {
            warn!(flow = %name, "replaced existing flow");
        } else {
            info!(flow = %name, "added flow");
        }
    }

    /// Remove the flow registered under `name`, returning its handle.
    ///
    /// Unknown names are an absence, not a fault.
    pub async fn remove_flow(&self, name: &str) -> Option<Arc<dyn Flow>> {
        let removed = self.flows.write().await.remove(name);

        if removed.is_some() {
            info!(flow = %name, "removed flow");
        }

        removed
    }

    pub async fn flow(&self, name: &str) -> Option<Arc<dyn Flow>> {
        self.flows.read().await.get(name).cloned()
    }

    pub async fn flow_names(&self) -> Vec<String> {
        self.flows.read().await.keys().cloned().collect()
    }

    pub async fn flow_count(&self) -> usize {
        self.flows.read().await.len()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the daemon: initialize every registered flow, then idle
    /// until [`stop`](Self::stop) is called.
    ///
    /// An initialization failure clears the running flag and surfaces
    /// as an error.
    pub async fn start(&self) -> Result<(), FlowError> {
        info!("starting flow daemon");
        let shutdown = self.shutdown_token();
        self.running.store(true, Ordering::SeqCst);

        if let Err(e) = self.initialize_flows().await {
            self.running.store(false, Ordering::SeqCst);
            return Err(e);
        }

        shutdown.cancelled().await;
        self.running.store(false, Ordering::SeqCst);
        info!("flow daemon stopped");

        Ok(())
    }

    /// Stop the daemon. A no-op when not started.
    ///
    /// A new shutdown token is armed on the way out, so a subsequent
    /// `start` idles until the next stop rather than observing the
    /// cancelled one.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);

        let mut shutdown = self
            .shutdown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        shutdown.cancel();
        *shutdown = CancellationToken::new();
    }

    fn shutdown_token(&self) -> CancellationToken {
        self.shutdown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn initialize_flows(&self) -> Result<(), FlowError> {
        let flows = self.flows.read().await;

        for (name, flow) in flows.iter() {
            debug!(flow = %name, "initializing flow");
            flow.initialize().await.map_err(|e| {
                FlowError::Initialization(format!("flow '{}': {}", name, e))
            })?;
        }

        Ok(())
    }
}
