pub mod home;
pub mod login;
pub mod not_found;
pub mod templates;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use templates::TemplatesPage;
