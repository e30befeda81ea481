use anyhow::{Result, ensure};

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx};
use ens_core::config::{SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
use ens_core::{GateDecision, KeyValueStore, Locale, MemoryStore, SessionGate};

pub struct SessionGateScenario;

fn gate_tracks_flag_presence() -> Result<()> {
    let store = MemoryStore::new();
    let gate = SessionGate::new(store.clone());
    for locale in Locale::ALL {
        ensure!(
            gate.check(locale) == GateDecision::Redirect(format!("/{locale}/login")),
            "missing flag must redirect to the {locale} login"
        );
    }

    gate.login()?;
    ensure!(gate.check(Locale::En) == GateDecision::Render, "flag must admit");

    let home = gate.logout(Locale::En)?;
    ensure!(home == "/en", "logout must return home, got {home}");
    ensure!(store.get(SESSION_FLAG_KEY)?.is_none(), "logout must remove the flag");
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for SessionGateScenario {
    fn name(&self) -> &'static str {
        "session-gate"
    }

    fn description(&self) -> &'static str {
        "The gallery redirects to login without a session flag and logout clears it"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(gate_tracks_flag_presence)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/en").await?;
        page.storage_clear().await?;

        page.open("/en/Templates").await?;
        page.wait_for_path("/en/login", SETTLE_TIMEOUT).await?;

        page.storage_set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE).await?;
        page.open("/en/Templates").await?;
        page.wait_for_count("article.template-card", 6, SETTLE_TIMEOUT).await?;

        page.click("button.nav-logout").await?;
        page.wait_for_path("/en", SETTLE_TIMEOUT).await?;
        ensure!(
            page.storage_get(SESSION_FLAG_KEY).await?.is_none(),
            "logout must remove the flag"
        );
        Ok(())
    }
}
