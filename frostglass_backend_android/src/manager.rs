// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named native-view providers.
//!
//! The cross-platform layer asks for a native view by name. A
//! [`ViewManagerRegistry`] (the host "package") maps names to
//! [`ViewManager`]s; each request creates exactly one new
//! [`GlassSurface`]. Nothing keeps a list of created views.

use std::fmt;

use crate::context::ThemedContext;
use crate::surface::{CompositionStrategy, GlassSurface};

/// The name the glass view is registered under.
pub const GLASS_VIEW_NAME: &str = "GlassView";

/// A factory for one kind of native view.
pub trait ViewManager {
    /// The name the cross-platform layer uses to request this view.
    fn name(&self) -> &'static str;

    /// Creates a new view bound to `context`.
    fn create_view_instance(&self, context: &ThemedContext) -> GlassSurface;
}

/// Provides the glass panel under [`GLASS_VIEW_NAME`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlassViewManager {
    strategy: CompositionStrategy,
}

impl GlassViewManager {
    /// Creates a manager whose surfaces use `strategy`.
    #[must_use]
    pub const fn with_strategy(strategy: CompositionStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the composition strategy given to new surfaces.
    #[must_use]
    pub const fn strategy(&self) -> CompositionStrategy {
        self.strategy
    }
}

impl ViewManager for GlassViewManager {
    fn name(&self) -> &'static str {
        GLASS_VIEW_NAME
    }

    fn create_view_instance(&self, context: &ThemedContext) -> GlassSurface {
        GlassSurface::new(context, self.strategy)
    }
}

/// Errors at the view-registry boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// No manager is registered under this name.
    UnknownView(String),
    /// A manager is already registered under this name.
    DuplicateView(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownView(name) => write!(f, "no view manager registered as `{name}`"),
            Self::DuplicateView(name) => {
                write!(f, "a view manager is already registered as `{name}`")
            }
        }
    }
}

impl core::error::Error for ViewError {}

/// View managers by name.
#[derive(Default)]
pub struct ViewManagerRegistry {
    managers: Vec<Box<dyn ViewManager>>,
}

impl ViewManagerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the glass package: a single
    /// [`GlassViewManager`] with the default strategy.
    #[must_use]
    pub fn with_glass_package() -> Self {
        let mut registry = Self::new();
        registry.managers.push(Box::new(GlassViewManager::default()));
        registry
    }

    /// Registers a manager under its name.
    pub fn register(&mut self, manager: Box<dyn ViewManager>) -> Result<(), ViewError> {
        let name = manager.name();
        if self.contains(name) {
            return Err(ViewError::DuplicateView(name.to_owned()));
        }
        self.managers.push(manager);
        Ok(())
    }

    /// Returns `true` if a manager is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.managers.iter().any(|m| m.name() == name)
    }

    /// Returns the registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.managers.iter().map(|m| m.name())
    }

    /// Creates a new view by name.
    pub fn create_view(
        &self,
        name: &str,
        context: &ThemedContext,
    ) -> Result<GlassSurface, ViewError> {
        let manager = self
            .managers
            .iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| ViewError::UnknownView(name.to_owned()))?;
        Ok(manager.create_view_instance(context))
    }
}

impl fmt::Debug for ViewManagerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::LifecycleRegistry;

    #[test]
    fn glass_package_provides_glass_view() {
        let registry = ViewManagerRegistry::with_glass_package();
        assert!(registry.contains(GLASS_VIEW_NAME));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["GlassView"]);
    }

    #[test]
    fn each_request_creates_a_new_surface() {
        let lifecycle = LifecycleRegistry::new();
        let ctx = ThemedContext::new(lifecycle.clone());
        let registry = ViewManagerRegistry::with_glass_package();
        let Ok(a) = registry.create_view(GLASS_VIEW_NAME, &ctx) else {
            panic!("GlassView is registered");
        };
        let Ok(b) = registry.create_view(GLASS_VIEW_NAME, &ctx) else {
            panic!("GlassView is registered");
        };
        assert_ne!(a.id(), b.id());
        assert_eq!(lifecycle.observer_count(), 2);
        assert_eq!(a.strategy(), CompositionStrategy::DisposeOnDetachedFromWindow);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let ctx = ThemedContext::new(LifecycleRegistry::new());
        let registry = ViewManagerRegistry::with_glass_package();
        let err = registry.create_view("BlurView", &ctx).err();
        assert_eq!(err, Some(ViewError::UnknownView("BlurView".into())));
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("no view manager registered as `BlurView`")
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ViewManagerRegistry::with_glass_package();
        let result = registry.register(Box::new(GlassViewManager::with_strategy(
            CompositionStrategy::DisposeOnLifecycleDestroyed,
        )));
        assert_eq!(result, Err(ViewError::DuplicateView("GlassView".into())));
        assert_eq!(registry.names().count(), 1);
    }

    #[test]
    fn manager_strategy_reaches_surfaces() {
        let ctx = ThemedContext::new(LifecycleRegistry::new());
        let mut registry = ViewManagerRegistry::new();
        assert!(registry.create_view(GLASS_VIEW_NAME, &ctx).is_err());
        let manager =
            GlassViewManager::with_strategy(CompositionStrategy::DisposeOnLifecycleDestroyed);
        assert_eq!(registry.register(Box::new(manager)), Ok(()));
        let surface = registry.create_view(GLASS_VIEW_NAME, &ctx);
        assert_eq!(
            surface.map(|s| s.strategy()),
            Ok(CompositionStrategy::DisposeOnLifecycleDestroyed)
        );
    }
}
