use crate::dom::current_year;
use crate::i18n::use_i18n;
use ens_core::Section;
use ens_core::config::{BRAND_URL, SUPPORT_EMAIL, SUPPORT_PHONE_DISPLAY, SUPPORT_PHONE_TEL};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Copyright year; defaults to the current one.
    #[prop_or_default]
    pub year: Option<i32>,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let i18n = use_i18n();
    let year = props.year.unwrap_or_else(current_year).to_string();
    let mut args = BTreeMap::new();
    args.insert("year", year.as_str());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <p>{ i18n.t("footer.description") }</p>
                </div>
                <nav aria-label={i18n.t("footer.quickLinks")}>
                    <h4>{ i18n.t("footer.quickLinks") }</h4>
                    <ul>
                        { for Section::NAV.iter().map(|section| html! {
                            <li><a href={section.anchor()}>{ i18n.t(section.nav_key()) }</a></li>
                        }) }
                    </ul>
                </nav>
                <address>
                    <h4>{ i18n.t("footer.contactUs") }</h4>
                    <a href={format!("tel:{SUPPORT_PHONE_TEL}")} dir="ltr">{ SUPPORT_PHONE_DISPLAY }</a>
                    <a href={format!("mailto:{SUPPORT_EMAIL}")}>{ SUPPORT_EMAIL }</a>
                    <span>{ i18n.t("footer.location") }</span>
                </address>
            </div>
            <div class="footer-bottom">
                <a href={BRAND_URL} target="_blank" rel="noopener noreferrer">
                    { i18n.tr("footer.copyright", &args) }
                </a>
                <span class="footer-legal">
                    <a href="#">{ i18n.t("footer.privacy") }</a>
                    <a href="#">{ i18n.t("footer.terms") }</a>
                </span>
            </div>
        </footer>
    }
}
