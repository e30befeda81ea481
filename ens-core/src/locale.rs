use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text and layout direction of a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute and CSS `direction` property.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two supported site locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

/// Static metadata attached to each locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub locale: Locale,
    pub code: &'static str,
    pub name: &'static str,
    pub direction: Direction,
    /// Label shown on the switcher button while this locale is active.
    pub switch_label: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        locale: Locale::Ar,
        code: "ar",
        name: "العربية",
        direction: Direction::Rtl,
        switch_label: "EN",
    },
    LocaleMeta {
        locale: Locale::En,
        code: "en",
        name: "English",
        direction: Direction::Ltr,
        switch_label: "عربي",
    },
];

impl Locale {
    pub const ALL: [Self; 2] = [Self::Ar, Self::En];

    #[must_use]
    pub const fn meta(self) -> &'static LocaleMeta {
        match self {
            Self::Ar => &LOCALE_META[0],
            Self::En => &LOCALE_META[1],
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        self.meta().code
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        self.meta().direction
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        self.direction().is_rtl()
    }

    /// The other locale; toggling twice returns the original.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Parse a route segment, accepting only the exact lowercase codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A route segment that is not one of the supported locale codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale segment `{0}`")]
pub struct UnresolvedLocale(pub String);

impl FromStr for Locale {
    type Err = UnresolvedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnresolvedLocale(s.to_string()))
    }
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}
