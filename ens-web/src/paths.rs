//! URLs that respect the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/landing` for a project page),
//! generated URLs are prefixed with it. Builds without it use root-anchored paths.

use ens_core::Locale;

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// In-site link for a plain `<a href>`, such as `/en#packages`.
#[must_use]
pub fn page_href(path: &str) -> String {
    asset_path_with_base(path, public_url())
}

/// Brand logo for `locale`; the Arabic wordmark reads right to left.
#[must_use]
pub fn logo_path(locale: Locale) -> String {
    match locale {
        Locale::Ar => asset_path("static/img/ENS-AR.png"),
        Locale::En => asset_path("static/img/ENS-EN.png"),
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_prefixed_without_base() {
        assert_eq!(asset_path_with_base("static/img/ENS-AR.png", ""), "/static/img/ENS-AR.png");
        assert_eq!(asset_path_with_base("/static/app.css", ""), "/static/app.css");
    }

    #[test]
    fn prefixed_with_public_base() {
        assert_eq!(
            asset_path_with_base("/static/img/ENS-EN.png", "/landing/"),
            "/landing/static/img/ENS-EN.png"
        );
    }

    #[test]
    fn router_base_trims_or_disappears() {
        assert_eq!(router_base_with_base("/landing/"), Some("/landing".to_string()));
        assert_eq!(router_base_with_base("  "), None);
        assert_eq!(router_base_with_base("/"), None);
    }

    #[test]
    fn page_href_keeps_fragment() {
        assert_eq!(asset_path_with_base("/en#packages", "/landing"), "/landing/en#packages");
        assert_eq!(page_href("/ar#contact"), "/ar#contact");
    }

    #[test]
    fn logo_follows_locale() {
        assert!(logo_path(Locale::Ar).ends_with("ENS-AR.png"));
        assert!(logo_path(Locale::En).ends_with("ENS-EN.png"));
    }
}
