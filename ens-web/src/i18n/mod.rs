mod bundle;
mod context;

pub use bundle::{AR_SOURCE, EN_SOURCE, catalogs};
pub use context::{I18n, use_i18n};
