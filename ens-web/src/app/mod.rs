use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

pub mod routing;
pub mod shell;

pub use shell::Shell;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Shell />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServerAppProps {
    pub url: AttrValue,
}

/// The app over an in-memory history, for rendering outside a browser.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = use_memo(props.url.clone(), |url| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(url.to_string());
        history
    });

    html! {
        <Router history={(*history).clone()}>
            <Shell />
        </Router>
    }
}
