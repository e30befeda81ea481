use crate::i18n::{I18n, use_i18n};
use ens_core::{PricingTier, Section, TierRole};
use yew::prelude::*;

fn tier_card(i18n: &I18n, index: usize, tier: &PricingTier) -> Html {
    let role = TierRole::for_index(index);
    let currency = i18n.t("pricing.egp");
    let class = classes!(
        "pricing-card",
        matches!(role, TierRole::Popular).then_some("pricing-card--popular")
    );
    let badge = role.badge_key().map(|key| {
        let badge_class = if matches!(role, TierRole::Popular) {
            "badge badge-popular"
        } else {
            "badge badge-discount"
        };
        html! { <div class={badge_class}>{ i18n.t(key) }</div> }
    });

    html! {
        <article {class}>
            { badge.unwrap_or_default() }
            <h3>{ tier.name.clone() }</h3>
            <div class="price">
                if !tier.original_price.is_empty() {
                    <s class="price-original">{ format!("{} {currency}", tier.original_price) }</s>
                }
                if role.shows_price() {
                    <>
                        <span class="price-current">{ tier.price.clone() }</span>
                        if !tier.price.is_empty() {
                            <span class="price-unit">{ format!("{currency} / {}", i18n.t("pricing.yearly")) }</span>
                        }
                    </>
                } else {
                    <span class="price-current">{ i18n.t("pricing.contactUs") }</span>
                }
            </div>
            <ul class="price-features">
                { for tier.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
            </ul>
            <a href={Section::Contact.anchor()} class="btn btn-block">{ tier.enterprise_cta.clone() }</a>
        </article>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let i18n = use_i18n();
    html! {
        <section id={Section::Packages.id()} class="pricing">
            <header class="section-header">
                <h2>
                    { i18n.t("pricing.title") }{" "}
                    <span class="text-gradient">{ i18n.t("pricing.titleHighlight") }</span>
                </h2>
                <p>{ i18n.t("pricing.description") }</p>
            </header>
            <div class="pricing-grid">
                { for i18n.content().tiers.iter().enumerate().map(|(index, tier)| tier_card(&i18n, index, tier)) }
            </div>
        </section>
    }
}
