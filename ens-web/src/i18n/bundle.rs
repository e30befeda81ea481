use ens_core::CatalogSet;
use once_cell::sync::Lazy;

pub const AR_SOURCE: &str = include_str!("../../i18n/ar.json");
pub const EN_SOURCE: &str = include_str!("../../i18n/en.json");

static CATALOGS: Lazy<CatalogSet> = Lazy::new(|| CatalogSet::from_sources(AR_SOURCE, EN_SOURCE));

/// Both bundled catalogs, parsed on first use and shared thereafter.
#[must_use]
pub fn catalogs() -> &'static CatalogSet {
    &CATALOGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use ens_core::{Catalog, Locale};

    #[test]
    fn bundled_catalogs_parse() {
        assert!(Catalog::from_json(Locale::Ar, AR_SOURCE).is_ok());
        assert!(Catalog::from_json(Locale::En, EN_SOURCE).is_ok());
    }

    #[test]
    fn catalogs_resolve_per_locale() {
        assert_eq!(catalogs().get(Locale::En).t("nav.login"), "Log in");
        assert_eq!(catalogs().get(Locale::Ar).t("nav.login"), "تسجيل الدخول");
    }
}
