use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::container::{Container, SharedContext};
use super::context::ExecutionContext;
use super::options::ContainerOptions;

#[derive(Default)]
struct RegistryState {
    containers: HashMap<String, Arc<Container>>,
    contexts: HashMap<String, SharedContext>,
}

/// Name-keyed store of containers and their contexts.
///
/// Constructed once by the host and passed to whatever needs to create or
/// look up containers. Entries live as long as the registry; there is no
/// removal.
#[derive(Default)]
pub struct ContainerRegistry {
    state: Mutex<RegistryState>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container registered under `name`, creating it first if
    /// needed.
    ///
    /// Creation is idempotent: for a name that already exists the existing
    /// container is returned and `initial_context` is ignored.
    pub fn create(
        &self,
        name: impl Into<String>,
        initial_context: Option<ExecutionContext>,
    ) -> Arc<Container> {
        self.create_with_options(name, initial_context, ContainerOptions::default())
    }

    /// Same as [`create`](Self::create); `options` only apply to a newly
    /// created container.
    pub fn create_with_options(
        &self,
        name: impl Into<String>,
        initial_context: Option<ExecutionContext>,
        options: ContainerOptions,
    ) -> Arc<Container> {
        let name = name.into();
        let mut state = self.lock_state();

        if let Some(existing) = state.containers.get(&name) {
            debug!("Container '{}' already registered, reusing it", name);
            return existing.clone();
        }

        let context: SharedContext = Arc::new(tokio::sync::Mutex::new(
            initial_context.unwrap_or_default(),
        ));
        let container = Arc::new(Container::new(name.clone(), context.clone(), options));

        state.contexts.insert(name.clone(), context);
        state.containers.insert(name.clone(), container.clone());
        info!("Registered container '{}'", name);

        container
    }

    pub fn get(&self, name: &str) -> Option<Arc<Container>> {
        self.lock_state().containers.get(name).cloned()
    }

    pub fn execution_context(&self, name: &str) -> Option<SharedContext> {
        self.lock_state().contexts.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock_state().containers.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock_state().containers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock_state().containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
