use ens_core::config::{REMEMBERED_IDENTIFIER_KEY, SESSION_FLAG_KEY};
use ens_core::{
    Credentials, Delay, GateDecision, KeyValueStore, Locale, LoginError, LoginService,
    MemoryStore, MockAuthClient, NoDelay, SessionGate, ValidationError,
};
use futures::executor::block_on;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stays pending for exactly one poll.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

struct OneTick;

#[async_trait::async_trait(?Send)]
impl Delay for OneTick {
    async fn wait_ms(&self, _duration_ms: u32) {
        YieldOnce(false).await;
    }
}

fn service(store: &MemoryStore) -> LoginService<MockAuthClient<NoDelay>, MemoryStore> {
    LoginService::new(MockAuthClient::new(NoDelay), store.clone())
}

#[test]
fn protected_page_without_flag_redirects_to_login() {
    for locale in Locale::ALL {
        let gate = SessionGate::new(MemoryStore::new());
        assert_eq!(
            gate.check(locale),
            GateDecision::Redirect(format!("/{locale}/login"))
        );
    }
}

#[test]
fn invalid_credentials_leave_storage_untouched() {
    let store = MemoryStore::new();
    store.set(REMEMBERED_IDENTIFIER_KEY, "old@b.com").unwrap();
    let before = store.snapshot();
    let service = service(&store);

    let missing_id = block_on(service.attempt_login(&Credentials::new("", "x", false), Locale::Ar));
    assert!(matches!(
        missing_id,
        Err(LoginError::Validation(ValidationError::MissingIdentifier))
    ));
    let missing_secret =
        block_on(service.attempt_login(&Credentials::new("x", "", false), Locale::Ar));
    assert!(matches!(
        missing_secret,
        Err(LoginError::Validation(ValidationError::MissingSecret))
    ));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn remembered_login_sets_flag_and_identifier() {
    let store = MemoryStore::new();
    let success = block_on(
        service(&store).attempt_login(&Credentials::new("a@b.com", "pw", true), Locale::En),
    )
    .unwrap();
    assert_eq!(success.redirect, "/en");
    assert!(success.remembered);
    assert_eq!(store.get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(
        store.get(REMEMBERED_IDENTIFIER_KEY).unwrap().as_deref(),
        Some("a@b.com")
    );
}

#[test]
fn unremembered_login_clears_previous_identifier() {
    let store = MemoryStore::new();
    store.set(REMEMBERED_IDENTIFIER_KEY, "old@b.com").unwrap();
    block_on(service(&store).attempt_login(&Credentials::new("a@b.com", "pw", false), Locale::Ar))
        .unwrap();
    assert_eq!(store.get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(store.get(REMEMBERED_IDENTIFIER_KEY).unwrap(), None);
}

#[test]
fn second_attempt_while_in_flight_is_rejected() {
    let store = MemoryStore::new();
    let service = LoginService::new(MockAuthClient::new(OneTick), store.clone());
    let credentials = Credentials::new("a@b.com", "pw", false);

    block_on(async {
        let mut first = Box::pin(service.attempt_login(&credentials, Locale::Ar));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(service.is_in_flight());

        let second = service.attempt_login(&credentials, Locale::Ar).await;
        assert!(matches!(second, Err(LoginError::InFlight)));

        assert!(first.await.is_ok());
    });
    assert!(!service.is_in_flight());
    assert!(service.session().is_authenticated());
}

#[test]
fn abandoned_attempt_releases_in_flight_guard() {
    let store = MemoryStore::new();
    let service = LoginService::new(MockAuthClient::new(OneTick), store.clone());
    let credentials = Credentials::new("a@b.com", "pw", true);

    block_on(async {
        let mut first = Box::pin(service.attempt_login(&credentials, Locale::En));
        assert!(futures::poll!(first.as_mut()).is_pending());
        drop(first);
    });
    assert!(!service.is_in_flight());
    assert!(store.snapshot().is_empty());
}

#[test]
fn storage_failure_surfaces_after_auth() {
    let store = MemoryStore::new();
    store.reject_writes(true);
    let result =
        block_on(service(&store).attempt_login(&Credentials::new("a@b.com", "pw", true), Locale::Ar));
    assert!(matches!(result, Err(LoginError::Storage(_))));
    assert!(!SessionGate::new(store).is_authenticated());
}

#[test]
fn logout_returns_home_and_clears_flag() {
    let store = MemoryStore::new();
    let gate = SessionGate::new(store.clone());
    gate.login().unwrap();
    assert_eq!(gate.check(Locale::Ar), GateDecision::Render);
    assert_eq!(gate.logout(Locale::Ar).unwrap(), "/ar");
    assert_eq!(store.get(SESSION_FLAG_KEY).unwrap(), None);
}
