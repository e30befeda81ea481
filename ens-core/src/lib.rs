//! ENS Core
//!
//! Platform-agnostic locale and session coordination for the ENS landing site.
//! This crate holds every rule the pages depend on without touching the DOM:
//! route locale resolution, the presentation context, the readiness latch, the
//! mock session gate and login service, and the template gallery filter.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod locale;
pub mod presentation;
pub mod readiness;
pub mod resolver;
pub mod routes;
pub mod session;
pub mod storage;
pub mod templates;

// Re-export commonly used types
pub use auth::{
    AuthClient, AuthError, Credentials, Delay, LoginError, LoginService, LoginSuccess,
    MockAuthClient, NoDelay, ValidationError,
};
pub use catalog::{Catalog, CatalogError, CatalogSet, Entry};
pub use contact::{ContactError, ContactRequest};
pub use content::{FeatureItem, LandingContent, PricingTier, Step, TierRole};
pub use locale::{Direction, Locale, LocaleMeta, UnresolvedLocale, locales};
pub use presentation::{
    DocumentSurface, Lifecycle, PresentationContext, RecordingSurface, SurfaceError,
    SyncOutcome,
};
pub use readiness::ReadinessGate;
pub use resolver::{LocaleRoute, classify_path, resolve_locale, resolve_or_keep};
pub use routes::{Page, Section};
pub use session::{GateDecision, SessionGate, SessionState};
pub use storage::{KeyValueStore, MemoryStore, MemoryStoreError};
pub use templates::{
    CategoryFilter, FilterState, FilterView, TEMPLATES, TemplateDef, TemplateRecord, categories,
    filter, resolve_all,
};
