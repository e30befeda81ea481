use crate::components::{LanguageSwitcher, use_toaster};
use crate::dom::{DomDelay, input_checked, input_value};
use crate::i18n::use_i18n;
use crate::paths::{logo_path, page_href};
use crate::router::Route;
use crate::sections::back_arrow;
use crate::storage::BrowserStore;
use ens_core::{Credentials, LoginService, MockAuthClient, Section};
use yew::prelude::*;
use yew_router::prelude::*;

type WebLoginService = LoginService<MockAuthClient<DomDelay>, BrowserStore>;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let i18n = use_i18n();
    let locale = i18n.locale;
    let toaster = use_toaster();
    let navigator = use_navigator();

    let service = use_memo((), |_| -> WebLoginService {
        LoginService::new(MockAuthClient::new(DomDelay), BrowserStore)
    });
    let identifier = use_state(String::new);
    let secret = use_state(String::new);
    let remember = use_state(|| false);
    let show_secret = use_state(|| false);
    let submitting = use_state(|| false);
    let mounted = use_mut_ref(|| false);

    {
        let mounted = mounted.clone();
        let service = service.clone();
        let identifier = identifier.clone();
        let remember = remember.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            if let Some(saved) = service.session().remembered_identifier() {
                identifier.set(saved);
                remember.set(true);
            }
            move || *mounted.borrow_mut() = false
        });
    }

    let on_identifier = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                identifier.set(value);
            }
        })
    };
    let on_secret = {
        let secret = secret.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                secret.set(value);
            }
        })
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            if let Some(checked) = input_checked(&e) {
                remember.set(checked);
            }
        })
    };
    let toggle_secret = {
        let show_secret = show_secret.clone();
        Callback::from(move |_| show_secret.set(!*show_secret))
    };

    let on_submit = {
        let i18n = i18n.clone();
        let identifier = identifier.clone();
        let secret = secret.clone();
        let remember = remember.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if service.is_in_flight() {
                return;
            }
            let credentials = Credentials::new((*identifier).clone(), (*secret).clone(), *remember);
            let service = service.clone();
            let mounted = mounted.clone();
            let submitting = submitting.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            let i18n = i18n.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = service.attempt_login(&credentials, locale).await;
                if !*mounted.borrow() {
                    log::debug!("login attempt finished after the form was unmounted");
                    return;
                }
                submitting.set(false);
                match result {
                    Ok(success) => {
                        toaster.success(i18n.t("login.success"), None);
                        let target =
                            Route::recognize(&success.redirect).unwrap_or_else(|| Route::home(locale));
                        if let Some(nav) = navigator {
                            nav.push(&target);
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        toaster.error(i18n.t(err.message_key()));
                    }
                }
            });
        })
    };

    let busy = *submitting;
    html! {
        <main class="page page-login">
            <div class="login-top">
                <Link<Route> to={Route::home(locale)} classes="back-link">
                    <span aria-hidden="true">{ back_arrow(i18n.direction()) }</span>
                    { i18n.t("login.backToHome") }
                </Link<Route>>
                <LanguageSwitcher />
            </div>
            <div class="login-card">
                <img class="login-logo" src={logo_path(locale)} alt="ENS" />
                <h1>{ i18n.t("login.title") }</h1>
                <p>{ i18n.t("login.subtitle") }</p>
                <form class="login-form" onsubmit={on_submit} novalidate={true}>
                    <label for="login-email">{ i18n.t("login.email") }</label>
                    <input
                        id="login-email"
                        type="email"
                        dir="ltr"
                        autocomplete="email"
                        placeholder={i18n.t("login.emailPlaceholder")}
                        value={(*identifier).clone()}
                        oninput={on_identifier}
                    />
                    <label for="login-password">{ i18n.t("login.password") }</label>
                    <div class="password-field">
                        <input
                            id="login-password"
                            type={if *show_secret { "text" } else { "password" }}
                            autocomplete="current-password"
                            placeholder={i18n.t("login.passwordPlaceholder")}
                            value={(*secret).clone()}
                            oninput={on_secret}
                        />
                        <button
                            type="button"
                            class="btn btn-ghost btn-xs"
                            aria-label={i18n.t(if *show_secret { "login.hidePassword" } else { "login.showPassword" })}
                            aria-pressed={show_secret.to_string()}
                            onclick={toggle_secret}
                        >
                            { if *show_secret { "🙈" } else { "👁" } }
                        </button>
                    </div>
                    <div class="login-options">
                        <label>
                            <input id="login-remember" type="checkbox" checked={*remember} onchange={on_remember} />
                            { i18n.t("login.rememberMe") }
                        </label>
                        <a href="#">{ i18n.t("login.forgotPassword") }</a>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={busy} aria-busy={busy.to_string()}>
                        { if busy { i18n.t("login.loggingIn") } else { i18n.t("login.loginButton") } }
                    </button>
                </form>
                <p class="login-signup">
                    { i18n.t("login.noAccount") }{" "}
                    <a href={page_href(&Section::Contact.home_anchor(locale))}>{ i18n.t("login.createAccount") }</a>
                </p>
            </div>
            <footer class="login-footer">
                { format!("{} • {}", i18n.t("footer.privacy"), i18n.t("footer.terms")) }
            </footer>
        </main>
    }
}
