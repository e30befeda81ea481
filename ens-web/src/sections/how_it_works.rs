use crate::i18n::use_i18n;
use ens_core::Section;
use ens_core::content::has_connector;
use yew::prelude::*;

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    let i18n = use_i18n();
    let steps = &i18n.content().steps;
    html! {
        <section id={Section::HowItWorks.id()} class="how-it-works">
            <header class="section-header">
                <span class="badge">{ i18n.t("howItWorks.badge") }</span>
                <h2>
                    { i18n.t("howItWorks.title") }{" "}
                    <span class="text-gradient">{ i18n.t("howItWorks.titleHighlight") }</span>
                </h2>
                <p>{ i18n.t("howItWorks.description") }</p>
            </header>
            <ol class="steps">
                { for steps.iter().enumerate().map(|(index, step)| html! {
                    <li class="step">
                        if has_connector(index, steps.len()) {
                            <span class="step-connector" aria-hidden="true"></span>
                        }
                        <span class="step-number">{ step.number.clone() }</span>
                        <h3>{ step.title.clone() }</h3>
                        <p>{ step.description.clone() }</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}
