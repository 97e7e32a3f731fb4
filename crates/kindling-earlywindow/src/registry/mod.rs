//! Registration table for bootstrap plugins and window providers.
//!
//! The [`ProviderRegistry`] is the compile-time stand-in for runtime
//! service discovery: the host registers every available
//! [`GraphicsBootstrap`] and [`WindowProvider`] implementation before
//! calling [`load`](crate::proxy::load), which drains the registry
//! exactly once. Duplicate registrations for the same name are
//! rejected.

use crate::error::WindowError;
use crate::provider::{GraphicsBootstrap, WindowProvider};

/// Registry of available bootstrap plugins and window providers.
///
/// # Example
///
/// ```
/// use kindling_earlywindow::registry::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// assert!(registry.is_empty());
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    bootstraps: Vec<Box<dyn GraphicsBootstrap>>,
    providers: Vec<Box<dyn WindowProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a graphics bootstrap plugin.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::DuplicateBootstrap`] if a plugin with the
    /// same name is already registered.
    pub fn register_bootstrap(
        &mut self,
        bootstrap: Box<dyn GraphicsBootstrap>,
    ) -> Result<(), WindowError> {
        let name = bootstrap.name();
        if self.bootstraps.iter().any(|b| b.name() == name) {
            return Err(WindowError::DuplicateBootstrap {
                name: name.to_owned(),
            });
        }
        self.bootstraps.push(bootstrap);
        Ok(())
    }

    /// Registers a window provider.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::DuplicateProvider`] if a provider with
    /// the same name is already registered.
    pub fn register_provider(
        &mut self,
        provider: Box<dyn WindowProvider>,
    ) -> Result<(), WindowError> {
        let name = provider.name();
        if self.providers.iter().any(|p| p.name() == name) {
            return Err(WindowError::DuplicateProvider {
                name: name.to_owned(),
            });
        }
        self.providers.push(provider);
        Ok(())
    }

    /// Returns the names of the registered window providers, in
    /// registration order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Returns the number of registered window providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when no window providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Drains the registered bootstrap plugins, in registration order.
    pub fn take_bootstraps(&mut self) -> Vec<Box<dyn GraphicsBootstrap>> {
        std::mem::take(&mut self.bootstraps)
    }

    /// Drains the registered window providers, in registration order.
    pub fn take_providers(&mut self) -> Vec<Box<dyn WindowProvider>> {
        std::mem::take(&mut self.providers)
    }
}
