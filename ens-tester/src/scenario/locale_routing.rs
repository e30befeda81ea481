use anyhow::{Result, ensure};

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx};
use ens_core::{Locale, LocaleRoute, Page, classify_path, resolve_locale, resolve_or_keep};

pub struct LocaleRoutingScenario;

fn resolver_follows_first_segment() -> Result<()> {
    for locale in Locale::ALL {
        for page in [Page::Home, Page::Login, Page::Templates] {
            let path = page.path(locale);
            ensure!(
                resolve_locale(&path) == Some(locale),
                "{path} resolved to {:?}",
                resolve_locale(&path)
            );
        }
    }
    ensure!(resolve_locale("/").is_none(), "root must not resolve");
    ensure!(
        matches!(classify_path("/fr/login"), LocaleRoute::Unrecognized(_)),
        "unsupported code must be reported"
    );
    ensure!(
        resolve_or_keep("/fr", Locale::En) == Locale::En,
        "unsupported code must keep the active locale"
    );
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for LocaleRoutingScenario {
    fn name(&self) -> &'static str {
        "locale-routing"
    }

    fn description(&self) -> &'static str {
        "Path prefixes select the locale; root and unknown codes land on /ar"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(resolver_follows_first_segment)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;

        page.open("/en").await?;
        page.wait_for_lang("en", SETTLE_TIMEOUT).await?;
        ensure!(
            page.root_attr("dir").await?.as_deref() == Some("ltr"),
            "/en must render left to right"
        );

        page.open("/ar/login").await?;
        page.wait_for_lang("ar", SETTLE_TIMEOUT).await?;
        ensure!(
            page.root_attr("dir").await?.as_deref() == Some("rtl"),
            "/ar must render right to left"
        );

        page.open("/fr").await?;
        page.wait_for_path("/ar", SETTLE_TIMEOUT).await?;
        if ctx.verbose {
            println!("  🧭 /fr redirected to /ar");
        }
        Ok(())
    }
}
