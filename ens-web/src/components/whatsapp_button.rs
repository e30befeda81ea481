use crate::i18n::use_i18n;
use ens_core::config::WHATSAPP_URL;
use yew::prelude::*;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let i18n = use_i18n();
    html! {
        <a
            href={WHATSAPP_URL}
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-float"
            aria-label={i18n.t("whatsapp.label")}
        >
            <span aria-hidden="true">{"💬"}</span>
        </a>
    }
}
