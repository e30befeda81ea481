use crate::components::RequireSession;
use crate::pages::{HomePage, LoginPage, NotFoundPage, TemplatesPage};
use crate::router::Route;
use ens_core::config::DEFAULT_LOCALE;
use ens_core::{LocaleRoute, Page};
use yew::prelude::*;
use yew_router::prelude::*;

/// What the router shows for a matched route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    Redirect(Route),
    NotFound,
}

/// Paths without a usable locale segment go to the default-locale home.
#[must_use]
pub fn target_for(route: &Route) -> RouteTarget {
    match route {
        Route::NotFound => RouteTarget::NotFound,
        Route::Root => RouteTarget::Redirect(Route::home(DEFAULT_LOCALE)),
        _ => match (route.locale_route(), route.page()) {
            (LocaleRoute::Resolved(_), Some(page)) => RouteTarget::Page(page),
            (LocaleRoute::Unrecognized(segment), _) => {
                log::debug!("unsupported locale `{segment}`; redirecting home");
                RouteTarget::Redirect(Route::home(DEFAULT_LOCALE))
            }
            _ => RouteTarget::Redirect(Route::home(DEFAULT_LOCALE)),
        },
    }
}

fn page_view(page: Page) -> Html {
    match page {
        Page::Home => html! { <HomePage /> },
        Page::Login => html! { <LoginPage /> },
        Page::Templates => html! { <TemplatesPage /> },
    }
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands the route over by value.
pub fn switch(route: Route) -> Html {
    match target_for(&route) {
        RouteTarget::Page(page) if page.is_protected() => html! {
            <RequireSession>
                { page_view(page) }
            </RequireSession>
        },
        RouteTarget::Page(page) => page_view(page),
        RouteTarget::Redirect(to) => html! { <Redirect<Route> {to} /> },
        RouteTarget::NotFound => html! { <NotFoundPage /> },
    }
}
