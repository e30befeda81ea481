use crate::components::use_toaster;
use crate::dom::input_value;
use crate::i18n::use_i18n;
use crate::sections::forward_arrow;
use ens_core::config::WHATSAPP_URL;
use ens_core::{ContactRequest, Section};
use yew::prelude::*;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let i18n = use_i18n();
    let toaster = use_toaster();
    let form = use_state(ContactRequest::default);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                form.set(ContactRequest {
                    restaurant_name: value,
                    ..(*form).clone()
                });
            }
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                form.set(ContactRequest {
                    phone: value,
                    ..(*form).clone()
                });
            }
        })
    };
    let on_submit = {
        let form = form.clone();
        let i18n = i18n.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    toaster.success(
                        i18n.t("contact.successTitle"),
                        Some(i18n.t("contact.successDescription").into()),
                    );
                    form.set(ContactRequest::default());
                }
                Err(err) => toaster.error(i18n.t(err.message_key())),
            }
        })
    };

    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="contact-copy">
                <h2>
                    <span>{ i18n.t("contact.title1") }</span>{" "}
                    <span class="text-primary">{ i18n.t("contact.title2") }</span>
                </h2>
                <p>{ i18n.t("contact.description") }</p>
                <a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="btn btn-success">
                    { i18n.t("contact.whatsapp") }
                </a>
            </div>
            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                <label for="contact-restaurant">{ format!("{} *", i18n.t("contact.restaurantName")) }</label>
                <input
                    id="contact-restaurant"
                    type="text"
                    placeholder={i18n.t("contact.restaurantPlaceholder")}
                    value={form.restaurant_name.clone()}
                    oninput={on_name}
                />
                <label for="contact-phone">{ format!("{} *", i18n.t("contact.phone")) }</label>
                <input
                    id="contact-phone"
                    type="tel"
                    dir="ltr"
                    placeholder={i18n.t("contact.phonePlaceholder")}
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
                <button type="submit" class="btn btn-primary">
                    { i18n.t("contact.submit") }
                    <span class="arrow" aria-hidden="true">{ forward_arrow(i18n.direction()) }</span>
                </button>
            </form>
        </section>
    }
}
