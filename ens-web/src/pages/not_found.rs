use crate::i18n::use_i18n;
use crate::router::Route;
use ens_core::config::DEFAULT_LOCALE;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown for paths that match no route.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ i18n.t("notFound.title") }</h1>
            <p>{ i18n.t("notFound.message") }</p>
            <Link<Route> to={Route::home(DEFAULT_LOCALE)} classes="btn btn-primary">
                { i18n.t("notFound.back") }
            </Link<Route>>
        </section>
    }
}
