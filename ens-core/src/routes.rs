//! Locale-prefixed paths and in-page anchors.

use crate::locale::Locale;

/// Top-level pages reachable under a locale prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Templates,
}

impl Page {
    /// Path of this page for `locale`, e.g. `/en/Templates`.
    #[must_use]
    pub fn path(self, locale: Locale) -> String {
        match self {
            Self::Home => format!("/{locale}"),
            Self::Login => format!("/{locale}/login"),
            Self::Templates => format!("/{locale}/Templates"),
        }
    }

    /// Whether the page is behind the session gate.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Templates)
    }
}

/// Landing page sections addressable by fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Packages,
    HowItWorks,
    Contact,
}

impl Section {
    /// Sections listed in the navigation bar and footer, in display order.
    pub const NAV: [Self; 4] = [
        Self::Features,
        Self::Packages,
        Self::HowItWorks,
        Self::Contact,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Packages => "packages",
            Self::HowItWorks => "how-it-works",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#how-it-works`.
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Anchor on the home page of `locale`, usable from other pages.
    #[must_use]
    pub fn home_anchor(self, locale: Locale) -> String {
        format!("{}{}", Page::Home.path(locale), self.anchor())
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Hero => "nav.home",
            Self::Features => "nav.features",
            Self::Packages => "nav.packages",
            Self::HowItWorks => "nav.howItWorks",
            Self::Contact => "nav.contact",
        }
    }
}
