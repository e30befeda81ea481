use crate::i18n::use_i18n;
use ens_core::Section;
use yew::prelude::*;

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let i18n = use_i18n();
    html! {
        <section id={Section::Features.id()} class="features">
            <header class="section-header">
                <span class="badge">{ i18n.t("features.badge") }</span>
                <h2>
                    { i18n.t("features.title") }{" "}
                    <span class="text-gradient">{ i18n.t("features.titleHighlight") }</span>{" "}
                    { i18n.t("features.titleEnd") }
                </h2>
                <p>{ i18n.t("features.description") }</p>
            </header>
            <div class="feature-grid">
                { for i18n.content().features.iter().map(|feature| html! {
                    <article class="feature-card">
                        <h3>{ feature.title.clone() }</h3>
                        <p>{ feature.description.clone() }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
