use crate::i18n::catalogs;
use ens_core::config::DEFAULT_LOCALE;
use ens_core::{Catalog, Direction, LandingContent, Locale};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

/// Translation handle passed down the tree by context.
///
/// Rebuilt only when the active locale changes, so list-shaped content is
/// decoded once per switch.
#[derive(Clone)]
pub struct I18n {
    pub locale: Locale,
    catalog: Arc<Catalog>,
    content: Rc<LandingContent>,
    /// Requests a language switch; the shell owns the actual transition.
    pub on_switch: Callback<Locale>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.on_switch == other.on_switch
    }
}

impl I18n {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self::from_catalog(catalogs().get(locale))
    }

    #[must_use]
    pub fn from_catalog(catalog: Arc<Catalog>) -> Self {
        let content = Rc::new(LandingContent::from_catalog(&catalog));
        Self {
            locale: catalog.locale(),
            catalog,
            content,
            on_switch: Callback::noop(),
        }
    }

    #[must_use]
    pub fn with_switch(mut self, on_switch: Callback<Locale>) -> Self {
        self.on_switch = on_switch;
        self
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(key)
    }

    #[must_use]
    pub fn tr(&self, key: &str, args: &BTreeMap<&str, &str>) -> String {
        self.catalog.tr(key, args)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn content(&self) -> &LandingContent {
        &self.content
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

/// The nearest [`I18n`] provider, or the default locale outside of one.
#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_default()
}
