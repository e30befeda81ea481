use crate::i18n::use_i18n;
use crate::router::Route;
use crate::storage::BrowserStore;
use ens_core::{GateDecision, Page, SessionGate};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only once the session check has passed.
///
/// Until the check runs nothing is rendered; without a session flag the
/// history entry is replaced with the login page of the active locale.
#[function_component(RequireSession)]
pub fn require_session(props: &Props) -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let decision = use_state(|| None::<GateDecision>);

    {
        let decision = decision.clone();
        use_effect_with(i18n.locale, move |locale| {
            let outcome = SessionGate::new(BrowserStore).check(*locale);
            if let GateDecision::Redirect(path) = &outcome {
                let target = Route::recognize(path)
                    .unwrap_or_else(|| Route::for_page(Page::Login, *locale));
                match navigator {
                    Some(nav) => nav.replace(&target),
                    None => log::warn!("no navigator; cannot redirect to {path}"),
                }
            }
            decision.set(Some(outcome));
        });
    }

    match *decision {
        Some(GateDecision::Render) => props.children.clone(),
        Some(GateDecision::Redirect(_)) | None => Html::default(),
    }
}
