use ens_core::{Locale, LocaleRoute, Page, classify_path};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:locale")]
    Home { locale: String },
    #[at("/:locale/login")]
    Login { locale: String },
    #[at("/:locale/Templates")]
    Templates { locale: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn for_page(page: Page, locale: Locale) -> Self {
        let locale = locale.code().to_string();
        match page {
            Page::Home => Self::Home { locale },
            Page::Login => Self::Login { locale },
            Page::Templates => Self::Templates { locale },
        }
    }

    #[must_use]
    pub fn home(locale: Locale) -> Self {
        Self::for_page(Page::Home, locale)
    }

    #[must_use]
    pub const fn page(&self) -> Option<Page> {
        match self {
            Self::Home { .. } => Some(Page::Home),
            Self::Login { .. } => Some(Page::Login),
            Self::Templates { .. } => Some(Page::Templates),
            Self::Root | Self::NotFound => None,
        }
    }

    /// How the locale segment of this route resolves.
    #[must_use]
    pub fn locale_route(&self) -> LocaleRoute {
        match self {
            Self::NotFound => LocaleRoute::Missing,
            _ => classify_path(&self.to_path()),
        }
    }

    /// Same page in `locale`; routes without a page land on its home.
    #[must_use]
    pub fn switched_to(&self, locale: Locale) -> Self {
        Self::for_page(self.page().unwrap_or(Page::Home), locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_routes_render_core_paths() {
        for locale in Locale::ALL {
            for page in [Page::Home, Page::Login, Page::Templates] {
                assert_eq!(Route::for_page(page, locale).to_path(), page.path(locale));
            }
        }
    }

    #[test]
    fn recognizes_locale_routes() {
        assert_eq!(Route::recognize("/en"), Some(Route::home(Locale::En)));
        assert_eq!(
            Route::recognize("/ar/Templates"),
            Some(Route::for_page(Page::Templates, Locale::Ar))
        );
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
    }

    #[test]
    fn locale_route_classifies_segment() {
        assert_eq!(Route::home(Locale::En).locale_route(), LocaleRoute::Resolved(Locale::En));
        assert_eq!(Route::Root.locale_route(), LocaleRoute::Missing);
        assert_eq!(Route::NotFound.locale_route(), LocaleRoute::Missing);
        assert_eq!(
            Route::Home { locale: "fr".into() }.locale_route(),
            LocaleRoute::Unrecognized("fr".into())
        );
    }

    #[test]
    fn switching_keeps_page() {
        let login = Route::for_page(Page::Login, Locale::Ar);
        assert_eq!(login.switched_to(Locale::En).to_path(), "/en/login");
        assert_eq!(Route::NotFound.switched_to(Locale::En), Route::home(Locale::En));
    }
}
