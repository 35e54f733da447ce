use crate::ports::{Environment, RepositoryReader};

/// Application context holding the capabilities the probes run against.
pub struct AppContext<E: Environment, R: RepositoryReader> {
    environment: E,
    repositories: R,
}

impl<E: Environment, R: RepositoryReader> AppContext<E, R> {
    /// Create a new application context.
    pub fn new(environment: E, repositories: R) -> Self {
        Self { environment, repositories }
    }

    /// Get a reference to the process environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a reference to the repository reader.
    pub fn repositories(&self) -> &R {
        &self.repositories
    }
}
