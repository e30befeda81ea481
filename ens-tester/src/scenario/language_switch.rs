use anyhow::{Result, ensure};

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx, bundled_catalogs};
use ens_core::{Direction, Locale, PresentationContext, RecordingSurface};

pub struct LanguageSwitchScenario;

fn switch_round_trip_restores_state() -> Result<()> {
    let mut context = PresentationContext::new(bundled_catalogs(), RecordingSurface::default());
    context.initialize(Locale::Ar);
    let arabic_login = context.catalog().t("nav.login");

    context.update(Locale::En);
    ensure!(context.direction() == Direction::Ltr, "en must be ltr");
    ensure!(
        context.catalog().t("nav.login") != arabic_login,
        "en text must differ from ar"
    );

    context.update(Locale::Ar);
    ensure!(context.direction() == Direction::Rtl, "ar must be rtl");
    ensure!(context.catalog().t("nav.login") == arabic_login, "ar text restored");

    let surface = context.surface();
    ensure!(
        surface.lang == Some(Locale::Ar) && surface.dir == Some(Direction::Rtl),
        "surface left at {:?}/{:?}",
        surface.lang,
        surface.dir
    );
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for LanguageSwitchScenario {
    fn name(&self) -> &'static str {
        "language-switch"
    }

    fn description(&self) -> &'static str {
        "The toggle swaps path prefix, text, and direction, and switching back restores them"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(switch_round_trip_restores_state)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/ar").await?;
        page.wait_for_lang("ar", SETTLE_TIMEOUT).await?;

        page.click("[data-testid='lang-toggle']").await?;
        page.wait_for_path("/en", SETTLE_TIMEOUT).await?;
        page.wait_for_lang("en", SETTLE_TIMEOUT).await?;
        ensure!(
            page.root_attr("dir").await?.as_deref() == Some("ltr"),
            "switching to en must set dir=ltr"
        );

        page.click("[data-testid='lang-toggle']").await?;
        page.wait_for_path("/ar", SETTLE_TIMEOUT).await?;
        page.wait_for_lang("ar", SETTLE_TIMEOUT).await?;
        ensure!(
            page.root_attr("dir").await?.as_deref() == Some("rtl"),
            "switching back must restore dir=rtl"
        );
        Ok(())
    }
}
