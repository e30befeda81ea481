use anyhow::{Result, ensure};

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx, bundled_catalogs};
use ens_core::{LandingContent, Locale, resolve_all};

pub struct SmokeScenario;

fn bundled_content_loads() -> Result<()> {
    let catalogs = bundled_catalogs();
    for locale in Locale::ALL {
        let catalog = catalogs.get(locale);
        ensure!(
            catalog.lookup("nav.login").is_some(),
            "{locale} catalog has no nav.login"
        );
        let content = LandingContent::from_catalog(&catalog);
        ensure!(!content.tiers.is_empty(), "{locale} catalog has no pricing tiers");
        ensure!(resolve_all(&catalog).len() == 6, "{locale} template count");
    }
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Bundled catalogs load; the site boots into the default locale"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(bundled_content_loads)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/").await?;
        page.wait_for_path("/ar", SETTLE_TIMEOUT).await?;
        page.wait_for_lang("ar", SETTLE_TIMEOUT).await?;
        ensure!(page.count("header.site-nav").await? == 1, "navbar missing");
        ensure!(page.count("footer.site-footer").await? == 1, "footer missing");
        if ctx.verbose {
            println!("  🌐 Site booted at /ar");
        }
        Ok(())
    }
}
