//! Mock authentication.
//!
//! [`AuthClient`] is the seam a real backend would plug into. The shipped
//! [`MockAuthClient`] only waits a fixed delay; [`LoginService`] owns the
//! re-entry rule and the session writes that follow a successful attempt.

use crate::config::MOCK_LATENCY_MS;
use crate::locale::Locale;
use crate::routes::Page;
use crate::session::SessionGate;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::cell::Cell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier is required")]
    MissingIdentifier,
    #[error("password is required")]
    MissingSecret,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "login.errors.emailRequired",
            Self::MissingSecret => "login.errors.passwordRequired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("credentials rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a login attempt is already in flight")]
    InFlight,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("session storage failed: {0}")]
    Storage(#[source] E),
}

impl<E: std::error::Error + 'static> LoginError<E> {
    /// Translation key of the user-facing message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(err) | Self::Auth(AuthError::Validation(err)) => err.message_key(),
            Self::InFlight => "login.errors.inFlight",
            Self::Auth(AuthError::Rejected(_)) => "login.errors.rejected",
            Self::Storage(_) => "login.errors.storage",
        }
    }
}

/// Login form input. The secret is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
    pub remember: bool,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, remember: bool) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            remember,
        }
    }

    /// Both fields are required; whitespace-only input counts as empty.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }
        if self.secret.trim().is_empty() {
            return Err(ValidationError::MissingSecret);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

/// A timer the mock client awaits.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait_ms(&self, duration_ms: u32);
}

/// Resolves immediately; for tests and headless tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn wait_ms(&self, _duration_ms: u32) {}
}

#[async_trait(?Send)]
pub trait AuthClient {
    /// Authenticate the credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are invalid or rejected.
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Accepts any well-formed credentials after a fixed delay.
#[derive(Clone, Debug, Default)]
pub struct MockAuthClient<D: Delay> {
    delay: D,
}

impl<D: Delay> MockAuthClient<D> {
    pub const fn new(delay: D) -> Self {
        Self { delay }
    }
}

#[async_trait(?Send)]
impl<D: Delay> AuthClient for MockAuthClient<D> {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        credentials.validate()?;
        self.delay.wait_ms(MOCK_LATENCY_MS).await;
        Ok(())
    }
}

/// Outcome of a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Path to navigate to next.
    pub redirect: String,
    /// Whether the identifier was persisted for the next visit.
    pub remembered: bool,
}

/// Clears the in-flight flag when dropped, including when the attempt's
/// future is dropped before completion.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct LoginService<C: AuthClient, S: KeyValueStore> {
    client: C,
    session: SessionGate<S>,
    in_flight: Cell<bool>,
}

impl<C: AuthClient, S: KeyValueStore> LoginService<C, S> {
    pub const fn new(client: C, store: S) -> Self {
        Self {
            client,
            session: SessionGate::new(store),
            in_flight: Cell::new(false),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionGate<S> {
        &self.session
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one login attempt.
    ///
    /// Validation failures return before any state changes. While an attempt
    /// is awaiting the client, further calls fail with [`LoginError::InFlight`].
    ///
    /// # Errors
    ///
    /// Returns validation, re-entry, client, or storage failures.
    pub async fn attempt_login(
        &self,
        credentials: &Credentials,
        locale: Locale,
    ) -> Result<LoginSuccess, LoginError<S::Error>> {
        credentials.validate()?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(LoginError::InFlight)?;

        self.client.authenticate(credentials).await?;

        self.session
            .remember(&credentials.identifier, credentials.remember)
            .map_err(LoginError::Storage)?;
        self.session.login().map_err(LoginError::Storage)?;
        log::info!("mock login succeeded (remember: {})", credentials.remember);

        Ok(LoginSuccess {
            redirect: Page::Home.path(locale),
            remembered: credentials.remember,
        })
    }
}
