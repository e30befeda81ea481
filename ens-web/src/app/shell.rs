use crate::components::ToastProvider;
use crate::dom::DomSurface;
use crate::i18n::{I18n, catalogs};
use crate::router::Route;
use ens_core::{Locale, PresentationContext, ReadinessGate, resolve_or_keep};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub type WebPresentation = PresentationContext<DomSurface>;

/// Locale to synchronize to for `route`; paths without a supported locale
/// keep `current`.
#[must_use]
pub fn route_locale(route: Option<&Route>, current: Locale) -> Locale {
    route.map_or(current, |route| resolve_or_keep(&route.to_path(), current))
}

/// Owns the presentation context and gates everything below it on readiness.
///
/// Renders nothing until the route locale has been resolved and written to
/// the document once. After that, route changes are synchronized during
/// render so no frame shows the previous locale's text.
#[function_component(Shell)]
pub fn shell() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let context: Rc<RefCell<WebPresentation>> =
        use_mut_ref(|| PresentationContext::new(catalogs().clone(), DomSurface));
    let readiness = use_mut_ref(ReadinessGate::new);
    let ready = use_state(|| false);

    {
        let context = context.clone();
        use_effect_with((), move |_| move || context.borrow_mut().teardown());
    }

    {
        let context = context.clone();
        let ready = ready.clone();
        use_effect_with(route.clone(), move |route| {
            if readiness.borrow().is_ready() {
                return;
            }
            let locale = route_locale(route.as_ref(), context.borrow().locale());
            readiness.borrow_mut().mark_resolved();
            context.borrow_mut().update(locale);
            readiness.borrow_mut().mark_synchronized();
            if readiness.borrow().is_ready() {
                ready.set(true);
            }
        });
    }

    if *ready {
        let locale = route_locale(route.as_ref(), context.borrow().locale());
        context.borrow_mut().update(locale);
    }
    let active = context.borrow().locale();
    let i18n = {
        let context = context.clone();
        use_memo(active, move |_| I18n::from_catalog(context.borrow().catalog()))
    };

    let on_switch = {
        let context = context.clone();
        use_callback(route, move |target: Locale, route| {
            context.borrow_mut().update(target);
            let next = route
                .as_ref()
                .map_or_else(|| Route::home(target), |route| route.switched_to(target));
            match &navigator {
                Some(nav) => nav.push(&next),
                None => log::warn!("no navigator; staying on the current path"),
            }
        })
    };

    if !*ready {
        return Html::default();
    }

    let provided = (*i18n).clone().with_switch(on_switch);
    html! {
        <ContextProvider<I18n> context={provided}>
            <ToastProvider>
                <Switch<Route> render={super::routing::switch} />
            </ToastProvider>
        </ContextProvider<I18n>>
    }
}
