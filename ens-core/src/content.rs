//! List-shaped landing content decoded from the translation catalog.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

/// One "how it works" step. `number` is display text ("01", "٠١").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub enterprise_cta: String,
}

/// How a pricing card is decorated, by its position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierRole {
    /// First tier: carries the discount badge.
    Discounted,
    /// Second tier: highlighted as most popular.
    Popular,
    /// Third tier: shows "contact us" instead of a price.
    Enterprise,
    Plain,
}

impl TierRole {
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        match index {
            0 => Self::Discounted,
            1 => Self::Popular,
            2 => Self::Enterprise,
            _ => Self::Plain,
        }
    }

    /// Translation key of the badge shown above the card, if any.
    #[must_use]
    pub const fn badge_key(self) -> Option<&'static str> {
        match self {
            Self::Discounted => Some("pricing.save40"),
            Self::Popular => Some("pricing.mostPopular"),
            Self::Enterprise | Self::Plain => None,
        }
    }

    #[must_use]
    pub const fn shows_price(self) -> bool {
        !matches!(self, Self::Enterprise)
    }
}

/// Landing lists for one locale, decoded once per locale switch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingContent {
    pub partners: Vec<String>,
    pub features: Vec<FeatureItem>,
    pub steps: Vec<Step>,
    pub tiers: Vec<PricingTier>,
}

impl LandingContent {
    /// Decode every list; a malformed list is logged and left empty.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            partners: catalog.list_or_empty("trustedBy.partners"),
            features: catalog.list_or_empty("features.items"),
            steps: catalog.list_or_empty("howItWorks.steps"),
            tiers: catalog.list_or_empty("pricing.packages"),
        }
    }
}

/// Whether a connector is drawn after step `index` of `len`.
#[must_use]
pub const fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use serde_json::json;

    #[test]
    fn pricing_tier_tolerates_missing_optional_fields() {
        let tier: PricingTier =
            serde_json::from_value(json!({ "name": "Enterprise", "features": ["a"] })).unwrap();
        assert_eq!(tier.name, "Enterprise");
        assert!(tier.original_price.is_empty());
        assert_eq!(tier.features, ["a"]);
    }

    #[test]
    fn tier_roles_follow_position() {
        assert_eq!(TierRole::for_index(0).badge_key(), Some("pricing.save40"));
        assert_eq!(TierRole::for_index(1), TierRole::Popular);
        assert!(!TierRole::for_index(2).shows_price());
        assert!(TierRole::for_index(3).shows_price());
    }

    #[test]
    fn malformed_lists_decode_empty() {
        let catalog = Catalog::from_value(
            Locale::En,
            json!({
                "features": { "items": "not a list" },
                "howItWorks": { "steps": [{ "number": "01", "title": "Pick", "description": "d" }] }
            }),
        )
        .unwrap();
        let content = LandingContent::from_catalog(&catalog);
        assert!(content.features.is_empty());
        assert_eq!(content.steps.len(), 1);
        assert!(content.tiers.is_empty());
    }

    #[test]
    fn connectors_skip_last_step() {
        assert!(has_connector(0, 3));
        assert!(has_connector(1, 3));
        assert!(!has_connector(2, 3));
    }
}
