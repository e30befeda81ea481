use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(TrustedBy)]
pub fn trusted_by() -> Html {
    let i18n = use_i18n();
    let partners = &i18n.content().partners;
    // Rendered twice so the marquee can loop seamlessly.
    html! {
        <section class="trusted-by">
            <p class="trusted-by-title">{ i18n.t("trustedBy.title") }</p>
            <div class="marquee">
                <ul class="marquee-track">
                    { for partners.iter().chain(partners.iter()).enumerate().map(|(index, partner)| html! {
                        <li key={index} aria-hidden={(index >= partners.len()).to_string()}>{ partner.clone() }</li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
