//! Fixed configuration shared by every surface of the site.
//!
//! None of these values are read from the environment; deployment-specific
//! prefixes (`PUBLIC_URL`) live in the web crate's path helpers.

use crate::locale::Locale;

/// Locale used when nothing has been resolved from the route yet.
pub const DEFAULT_LOCALE: Locale = Locale::Ar;

/// localStorage key holding the mock session flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";

/// localStorage key holding the remembered login identifier.
pub const REMEMBERED_IDENTIFIER_KEY: &str = "rememberedEmail";

/// Value written under [`SESSION_FLAG_KEY`] on login.
pub const SESSION_FLAG_VALUE: &str = "true";

/// Simulated latency of the mock login, in milliseconds.
pub const MOCK_LATENCY_MS: u32 = 1_200;

/// Sentinel category that matches every template.
pub const ALL_CATEGORY: &str = "all";

/// Outbound WhatsApp deep link used by the contact section and floating button.
pub const WHATSAPP_URL: &str = "https://wa.me/966555482808";

/// Public support address shown in the footer.
pub const SUPPORT_EMAIL: &str = "info@ens.sa";

/// Public support phone number (display and `tel:` forms).
pub const SUPPORT_PHONE_DISPLAY: &str = "+20 100 000 0000";
pub const SUPPORT_PHONE_TEL: &str = "+201000000000";

/// Brand page linked from the footer copyright line.
pub const BRAND_URL: &str = "https://www.facebook.com/ENSEGYPTEG";

/// Maximum number of toasts visible at once.
pub const TOAST_LIMIT: usize = 3;

/// Lifetime of a toast before it dismisses itself, in milliseconds.
pub const TOAST_TTL_MS: u32 = 4_000;
