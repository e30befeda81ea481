use crate::i18n::use_i18n;
use yew::prelude::*;

/// Toggles between the two locales. The label names the *other* language.
#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();
    let target = i18n.locale.toggled();
    let onclick = {
        let on_switch = i18n.on_switch.clone();
        Callback::from(move |_| on_switch.emit(target))
    };
    html! {
        <button
            type="button"
            class="btn btn-ghost btn-sm lang-toggle"
            data-testid="lang-toggle"
            lang={target.code()}
            aria-label={i18n.t("nav.language")}
            {onclick}
        >
            { i18n.locale.meta().switch_label }
        </button>
    }
}
