use crate::components::LanguageSwitcher;
use crate::i18n::use_i18n;
use crate::paths::{logo_path, page_href};
use crate::router::Route;
use ens_core::{Page, Section};
use yew::prelude::*;
use yew_router::prelude::*;

/// Which page the bar sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// Home page: in-page anchors, login and "start now" actions.
    Landing,
    /// Template gallery: anchors point back home, logout replaces login.
    Gallery,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub variant: NavVariant,
    #[prop_or_default]
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let i18n = use_i18n();
    let locale = i18n.locale;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let anchor_href = |section: Section| match props.variant {
        NavVariant::Landing => section.anchor(),
        NavVariant::Gallery => page_href(&section.home_anchor(locale)),
    };
    let links = Section::NAV
        .iter()
        .map(|&section| {
            html! {
                <a href={anchor_href(section)} class="nav-link" onclick={close_menu.clone()}>
                    { i18n.t(section.nav_key()) }
                </a>
            }
        })
        .collect::<Html>();

    let actions = match props.variant {
        NavVariant::Landing => html! {
            <>
                <Link<Route> to={Route::for_page(Page::Login, locale)} classes="btn btn-ghost btn-sm nav-login">
                    { i18n.t("nav.login") }
                </Link<Route>>
                <a href={Section::Contact.anchor()} class="btn btn-primary btn-sm">{ i18n.t("nav.startNow") }</a>
            </>
        },
        NavVariant::Gallery => {
            let on_logout = props.on_logout.clone();
            let onclick = Callback::from(move |_| on_logout.emit(()));
            html! {
                <button type="button" class="btn btn-ghost btn-sm nav-logout" {onclick}>
                    { i18n.t("templates.logout") }
                </button>
            }
        }
    };

    html! {
        <header class="site-nav" role="banner">
            <div class="nav-bar">
                <Link<Route> to={Route::home(locale)} classes="nav-logo">
                    <img src={logo_path(locale)} alt="ENS" />
                </Link<Route>>
                <nav class="nav-links" aria-label={i18n.t("nav.home")}>{ links.clone() }</nav>
                <div class="nav-actions">
                    <LanguageSwitcher />
                    { actions.clone() }
                </div>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm nav-menu-toggle"
                    aria-label={i18n.t("nav.menu")}
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="nav-mobile" data-testid="mobile-menu">
                    { links }
                    { actions }
                </div>
            }
        </header>
    }
}
