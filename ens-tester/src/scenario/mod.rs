use anyhow::Result;
use ens_core::CatalogSet;
use std::time::Duration;

use crate::browser::SitePage;

pub mod language_switch;
pub mod locale_routing;
pub mod mock_login;
pub mod session_gate;
pub mod smoke;
pub mod template_gallery;

/// How long browser scenarios wait for routing and readiness to settle.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// A check that runs against `ens-core` alone.
pub type LogicCheck = fn() -> Result<()>;

pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

/// A named QA scenario with a logic half, a browser half, or both.
#[async_trait::async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn logic_check(&self) -> Option<LogicCheck>;

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

fn registry() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(smoke::SmokeScenario),
        Box::new(locale_routing::LocaleRoutingScenario),
        Box::new(language_switch::LanguageSwitchScenario),
        Box::new(session_gate::SessionGateScenario),
        Box::new(mock_login::MockLoginScenario),
        Box::new(template_gallery::TemplateGalleryScenario),
    ]
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    registry().into_iter().find(|scenario| scenario.name() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    registry()
        .iter()
        .map(|scenario| (scenario.name(), scenario.description()))
        .collect()
}

pub fn all_scenario_names() -> Vec<String> {
    registry()
        .iter()
        .map(|scenario| scenario.name().to_string())
        .collect()
}

/// The catalogs the site bundles, parsed the same way the front end does.
pub fn bundled_catalogs() -> CatalogSet {
    CatalogSet::from_sources(
        include_str!("../../../ens-web/i18n/ar.json"),
        include_str!("../../../ens-web/i18n/en.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        let names = all_scenario_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
        for name in &names {
            assert!(get_scenario(name).is_some(), "{name}");
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn every_logic_check_passes() {
        for scenario in registry() {
            if let Some(check) = scenario.logic_check() {
                check().unwrap_or_else(|err| panic!("{}: {err:#}", scenario.name()));
            }
        }
    }
}
