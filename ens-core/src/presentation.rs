//! The process-wide "active presentation locale".
//!
//! [`PresentationContext`] owns the active locale, the matching catalog and the
//! document surface it writes `lang`/`dir` to. Views receive it by injection;
//! nothing here is global.

use crate::catalog::{Catalog, CatalogSet};
use crate::locale::{Direction, Locale};
use std::sync::Arc;

/// A document attribute could not be written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to set {attribute}: {message}")]
pub struct SurfaceError {
    pub attribute: &'static str,
    pub message: String,
}

impl SurfaceError {
    #[must_use]
    pub fn new(attribute: &'static str, message: impl Into<String>) -> Self {
        Self {
            attribute,
            message: message.into(),
        }
    }
}

/// Document-level attributes a locale change writes to.
pub trait DocumentSurface {
    /// Apply the language and direction attributes.
    ///
    /// # Errors
    ///
    /// Returns the first attribute the document refused.
    fn apply(&mut self, locale: Locale, direction: Direction) -> Result<(), SurfaceError>;
}

/// Whether an update performed any work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Changed,
    Unchanged,
}

impl SyncOutcome {
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Lifecycle of the context: created, initialized on first render, torn down on unload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Pending,
    Active,
    TornDown,
}

pub struct PresentationContext<S: DocumentSurface> {
    catalogs: CatalogSet,
    surface: S,
    active: Option<Locale>,
    /// Locale last written to the surface successfully.
    applied: Option<Locale>,
    catalog: Arc<Catalog>,
    lifecycle: Lifecycle,
}

impl<S: DocumentSurface> PresentationContext<S> {
    /// Build a context that has not touched the document yet.
    ///
    /// Until [`PresentationContext::initialize`] runs, the catalog of the default
    /// locale is held but nothing is written to the surface.
    #[must_use]
    pub fn new(catalogs: CatalogSet, surface: S) -> Self {
        let catalog = catalogs.get(crate::config::DEFAULT_LOCALE);
        Self {
            catalogs,
            surface,
            active: None,
            applied: None,
            catalog,
            lifecycle: Lifecycle::Pending,
        }
    }

    /// First synchronization pass. Always writes the surface once, even when
    /// `locale` equals the default, so the document matches the route.
    pub fn initialize(&mut self, locale: Locale) -> SyncOutcome {
        if self.lifecycle != Lifecycle::Pending {
            return self.update(locale);
        }
        self.lifecycle = Lifecycle::Active;
        self.switch_to(locale);
        SyncOutcome::Changed
    }

    /// Switch to `locale` if it differs from the active one.
    ///
    /// Calling this with the active locale does nothing unless the previous
    /// write to the surface failed, in which case the write is retried. Calling it before
    /// [`PresentationContext::initialize`] initializes; after teardown it is ignored.
    pub fn update(&mut self, locale: Locale) -> SyncOutcome {
        match self.lifecycle {
            Lifecycle::Pending => self.initialize(locale),
            Lifecycle::TornDown => {
                log::debug!("presentation update to {locale} after teardown ignored");
                SyncOutcome::Unchanged
            }
            Lifecycle::Active if self.active == Some(locale) && self.applied == Some(locale) => {
                SyncOutcome::Unchanged
            }
            Lifecycle::Active => {
                self.switch_to(locale);
                SyncOutcome::Changed
            }
        }
    }

    fn switch_to(&mut self, locale: Locale) {
        if self.active != Some(locale) {
            log::debug!("presentation locale -> {locale} ({})", locale.direction());
            self.catalog = self.catalogs.get(locale);
            self.active = Some(locale);
        }
        match self.surface.apply(locale, locale.direction()) {
            Ok(()) => self.applied = Some(locale),
            Err(err) => {
                log::warn!("document not synchronized to {locale}: {err}");
                self.applied = None;
            }
        }
    }

    /// Mark the context as unloaded; later updates are no-ops.
    pub fn teardown(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Active locale, or the default before initialization.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.active.unwrap_or(crate::config::DEFAULT_LOCALE)
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.locale().direction()
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

/// Surface that records applied attributes; used by tests and headless tools.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub lang: Option<Locale>,
    pub dir: Option<Direction>,
    pub writes: usize,
    /// Number of upcoming writes to refuse.
    pub reject_next: usize,
}

impl DocumentSurface for RecordingSurface {
    fn apply(&mut self, locale: Locale, direction: Direction) -> Result<(), SurfaceError> {
        if self.reject_next > 0 {
            self.reject_next -= 1;
            return Err(SurfaceError::new("dir", "write refused"));
        }
        self.lang = Some(locale);
        self.dir = Some(direction);
        self.writes += 1;
        Ok(())
    }
}
