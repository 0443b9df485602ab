use crate::service::TodoService;
use crate::todo_actor;
use tracing::info;

/// The runtime orchestrator for the todo service.
///
/// `TodoSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actor
/// - **Wiring**: connecting the service to the store client
///
/// # Example
///
/// ```ignore
/// let system = TodoSystem::new();
///
/// let todo = system.todos.create_todo(&payload).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct TodoSystem {
    /// Service for interacting with the Todo store.
    pub todos: TodoService,

    /// Task handles for running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TodoSystem {
    /// Creates and initializes a new `TodoSystem` with the store actor running.
    pub fn new() -> Self {
        let (actor, store_client) = todo_actor::new();
        let todos = TodoService::new(store_client);

        // Spawn the actor in a background task; it owns all record state.
        let handle = tokio::spawn(actor.run());

        Self {
            todos,
            handles: vec![handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the service (closing the store channel), then waits for the
    /// actor task to complete.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.todos);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("Actor task failed: {e}"))?;
        }

        info!("System shutdown complete");
        Ok(())
    }
}

impl Default for TodoSystem {
    fn default() -> Self {
        Self::new()
    }
}
