#![cfg(target_arch = "wasm32")]

use ens_core::{
    Credentials, DocumentSurface, KeyValueStore, Locale, LoginService, MockAuthClient,
    PresentationContext, SessionGate,
};
use ens_core::config::{REMEMBERED_IDENTIFIER_KEY, SESSION_FLAG_KEY};
use ens_web::app::Shell;
use ens_web::components::RequireSession;
use ens_web::dom::{self, DomDelay, DomSurface};
use ens_web::i18n::{I18n, catalogs};
use ens_web::storage::BrowserStore;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_attr(name: &str) -> String {
    dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute(name))
        .unwrap_or_default()
}

fn body_direction() -> String {
    dom::document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.style().get_property_value("direction").ok())
        .unwrap_or_default()
}

fn clear_session() {
    let store = BrowserStore;
    store.remove(SESSION_FLAG_KEY).expect("clear flag");
    store.remove(REMEMBERED_IDENTIFIER_KEY).expect("clear identifier");
}

#[derive(Properties, PartialEq)]
struct RoutedProps {
    history: AnyHistory,
    #[prop_or_default]
    children: Html,
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    html! {
        <Router history={props.history.clone()}>
            { props.children.clone() }
        </Router>
    }
}

fn history_at(path: &str) -> AnyHistory {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(path.to_string());
    history
}

fn mount(history: &AnyHistory, children: Html) -> web_sys::Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("body")
        .append_child(&root)
        .expect("attach root");
    let props = RoutedProps {
        history: history.clone(),
        children,
    };
    yew::Renderer::<Routed>::with_root_and_props(root.clone(), props).render();
    root
}

async fn settle() {
    dom::sleep_ms(50).await.expect("timer");
}

#[wasm_bindgen_test]
fn surface_writes_lang_and_direction() {
    let mut surface = DomSurface;
    surface.apply(Locale::Ar, Locale::Ar.direction()).expect("apply ar");
    assert_eq!(root_attr("lang"), "ar");
    assert_eq!(root_attr("dir"), "rtl");
    assert_eq!(body_direction(), "rtl");

    surface.apply(Locale::En, Locale::En.direction()).expect("apply en");
    assert_eq!(root_attr("lang"), "en");
    assert_eq!(root_attr("dir"), "ltr");
    assert_eq!(body_direction(), "ltr");
}

#[wasm_bindgen_test]
fn presentation_round_trip_restores_document() {
    let mut context = PresentationContext::new(catalogs().clone(), DomSurface);
    context.initialize(Locale::Ar);
    context.update(Locale::En);
    context.update(Locale::Ar);
    assert_eq!(root_attr("lang"), "ar");
    assert_eq!(root_attr("dir"), "rtl");
    assert_eq!(context.catalog().t("nav.login"), "تسجيل الدخول");
}

#[wasm_bindgen_test]
fn browser_store_round_trips() {
    clear_session();
    let store = BrowserStore;
    assert_eq!(store.get("ens-test-key").expect("read"), None);
    store.set("ens-test-key", "value").expect("write");
    assert_eq!(store.get("ens-test-key").expect("read").as_deref(), Some("value"));
    store.remove("ens-test-key").expect("remove");
    assert_eq!(store.get("ens-test-key").expect("read"), None);
}

#[wasm_bindgen_test]
fn gate_redirects_until_flag_is_written() {
    clear_session();
    let gate = SessionGate::new(BrowserStore);
    assert!(!gate.is_authenticated());
    gate.login().expect("write flag");
    assert!(gate.is_authenticated());
    assert_eq!(gate.logout(Locale::En).expect("logout"), "/en");
    assert!(!gate.is_authenticated());
}

#[wasm_bindgen_test]
async fn mock_login_persists_session_after_delay() {
    clear_session();
    let service = LoginService::new(MockAuthClient::new(DomDelay), BrowserStore);
    let success = service
        .attempt_login(&Credentials::new("chef@example.com", "secret", true), Locale::Ar)
        .await
        .expect("login succeeds");
    assert_eq!(success.redirect, "/ar");
    assert!(service.session().is_authenticated());
    assert_eq!(
        service.session().remembered_identifier().as_deref(),
        Some("chef@example.com")
    );
    clear_session();
}

#[wasm_bindgen_test]
async fn require_session_redirects_to_login_without_flag() {
    clear_session();
    let history = history_at("/en/Templates");
    let root = mount(
        &history,
        html! {
            <ContextProvider<I18n> context={I18n::new(Locale::En)}>
                <RequireSession>
                    <p>{ "gallery-secret" }</p>
                </RequireSession>
            </ContextProvider<I18n>>
        },
    );
    settle().await;
    assert_eq!(history.location().path(), "/en/login");
    assert!(!root.text_content().unwrap_or_default().contains("gallery-secret"));
}

#[wasm_bindgen_test]
async fn route_change_updates_text_and_document_together() {
    clear_session();
    let history = history_at("/en/login");
    let root = mount(&history, html! { <Shell /> });
    settle().await;
    assert_eq!(root_attr("lang"), "en");
    assert!(root.text_content().unwrap_or_default().contains("Welcome back"));

    history.push("/ar/login");
    settle().await;
    assert_eq!(root_attr("lang"), "ar");
    assert_eq!(root_attr("dir"), "rtl");
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("مرحباً بعودتك"));
    assert!(!text.contains("Welcome back"));
}
