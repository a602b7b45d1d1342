//! # Catalog & Content State
//!
//! Wraps the validated catalog and the informational content for use in
//! Tauri commands.
//!
//! ## Thread Safety
//! Both wrappers hold data that is immutable after startup, so commands can
//! read them concurrently without any locking. `Arc` keeps the shared
//! ownership explicit and cloning cheap.

use std::sync::Arc;

use selection_core::catalog::Catalog;
use selection_core::content::SiteContent;

/// Wrapper around the validated [`Catalog`] for Tauri state management.
///
/// ## Why a Wrapper?
/// Tauri's state management requires types to implement `Send + Sync`.
/// This wrapper makes the intent explicit and provides a clean API for
/// accessing the catalog in commands.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Creates a new CatalogState wrapping a validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let perfume = catalog_state.inner().get(perfume_id);
    /// ```
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

/// Wrapper around the compiled-in [`SiteContent`].
#[derive(Debug, Clone)]
pub struct ContentState {
    content: Arc<SiteContent>,
}

impl ContentState {
    /// Creates a new ContentState wrapping the site content.
    pub fn new(content: SiteContent) -> Self {
        ContentState {
            content: Arc::new(content),
        }
    }

    /// Returns a reference to the inner content.
    pub fn inner(&self) -> &SiteContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_state_shares_one_catalog() {
        let state = CatalogState::new(Catalog::with_default_collection().unwrap());
        let clone = state.clone();
        assert_eq!(state.inner().len(), clone.inner().len());
        assert!(Arc::ptr_eq(&state.catalog, &clone.catalog));
    }

    #[test]
    fn test_content_state_exposes_content() {
        let state = ContentState::new(SiteContent::build().unwrap());
        assert_eq!(state.inner().hero.title, "Essence of Luxury");
    }
}
