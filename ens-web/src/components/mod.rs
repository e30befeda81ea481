pub mod footer;
pub mod language_switcher;
pub mod navbar;
pub mod require_session;
pub mod toast;
pub mod whatsapp_button;

pub use footer::Footer;
pub use language_switcher::LanguageSwitcher;
pub use navbar::{NavVariant, Navbar};
pub use require_session::RequireSession;
pub use toast::{ToastProvider, Toaster, use_toaster};
pub use whatsapp_button::WhatsAppButton;
