use anyhow::{Result, ensure};
use futures::executor::block_on;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx};
use ens_core::config::{MOCK_LATENCY_MS, REMEMBERED_IDENTIFIER_KEY, SESSION_FLAG_KEY};
use ens_core::{
    Credentials, Delay, Locale, LoginError, LoginService, MemoryStore, MockAuthClient,
};

pub struct MockLoginScenario;

/// Records the latency the mock client asks for instead of waiting.
#[derive(Clone, Default)]
struct RecordingDelay {
    requested_ms: Rc<Cell<Option<u32>>>,
}

#[async_trait::async_trait(?Send)]
impl Delay for RecordingDelay {
    async fn wait_ms(&self, duration_ms: u32) {
        self.requested_ms.set(Some(duration_ms));
    }
}

fn login_persists_session() -> Result<()> {
    let store = MemoryStore::new();
    let delay = RecordingDelay::default();
    let service = LoginService::new(MockAuthClient::new(delay.clone()), store.clone());

    let rejected = block_on(service.attempt_login(&Credentials::new("", "pw", true), Locale::En));
    ensure!(
        matches!(rejected, Err(LoginError::Validation(_))),
        "empty identifier must fail validation"
    );
    ensure!(store.snapshot().is_empty(), "validation failure must not write");
    ensure!(
        delay.requested_ms.get().is_none(),
        "validation failure must not reach the client"
    );

    let credentials = Credentials::new("chef@example.com", "pw", true);
    let success = block_on(service.attempt_login(&credentials, Locale::Ar))?;
    ensure!(success.redirect == "/ar", "redirect was {}", success.redirect);
    ensure!(
        delay.requested_ms.get() == Some(MOCK_LATENCY_MS),
        "mock latency was {:?}",
        delay.requested_ms.get()
    );
    ensure!(!service.is_in_flight(), "attempt must release the in-flight guard");

    let snapshot = store.snapshot();
    ensure!(snapshot.contains_key(SESSION_FLAG_KEY), "flag missing");
    ensure!(
        snapshot.get(REMEMBERED_IDENTIFIER_KEY).map(String::as_str) == Some("chef@example.com"),
        "identifier not remembered"
    );
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for MockLoginScenario {
    fn name(&self) -> &'static str {
        "mock-login"
    }

    fn description(&self) -> &'static str {
        "Login validates, waits the mock latency, persists the session, and returns home"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(login_persists_session)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/en/login").await?;
        page.storage_clear().await?;
        page.wait_for_lang("en", SETTLE_TIMEOUT).await?;

        page.click("button[type='submit']").await?;
        tokio::time::sleep(Duration::from_millis(300)).await;
        ensure!(page.path().await? == "/en/login", "empty form must not navigate");
        ensure!(
            page.storage_get(SESSION_FLAG_KEY).await?.is_none(),
            "empty form must not set the flag"
        );

        page.type_into("#login-email", "chef@example.com").await?;
        page.type_into("#login-password", "secret").await?;
        page.click("#login-remember").await?;
        page.click("button[type='submit']").await?;

        let latency = Duration::from_millis(u64::from(MOCK_LATENCY_MS));
        page.wait_for_path("/en", latency + SETTLE_TIMEOUT).await?;
        ensure!(
            page.storage_get(SESSION_FLAG_KEY).await?.is_some(),
            "login must set the session flag"
        );
        ensure!(
            page.storage_get(REMEMBERED_IDENTIFIER_KEY).await?.as_deref() == Some("chef@example.com"),
            "remember me must persist the identifier"
        );
        Ok(())
    }
}
