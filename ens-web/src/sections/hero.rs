use crate::i18n::use_i18n;
use crate::sections::forward_arrow;
use ens_core::Section;
use yew::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let i18n = use_i18n();
    html! {
        <section id={Section::Hero.id()} class="hero">
            <h1>
                <span>{ i18n.t("hero.title1") }</span>
                <span class="text-gradient">{ i18n.t("hero.title2") }</span>
            </h1>
            <p class="hero-description">{ i18n.t("hero.description") }</p>
            <a href={Section::Contact.anchor()} class="btn btn-primary btn-lg hero-cta">
                { i18n.t("hero.cta") }
                <span class="arrow" aria-hidden="true">{ forward_arrow(i18n.direction()) }</span>
            </a>
        </section>
    }
}
