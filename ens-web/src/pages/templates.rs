use crate::components::{NavVariant, Navbar, use_toaster};
use crate::dom::input_value;
use crate::i18n::use_i18n;
use crate::router::Route;
use crate::storage::BrowserStore;
use ens_core::{CategoryFilter, FilterState, SessionGate, TemplateRecord, categories, resolve_all};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct CardProps {
    record: TemplateRecord,
}

#[function_component(TemplateCard)]
fn template_card(props: &CardProps) -> Html {
    let i18n = use_i18n();
    let record = &props.record;
    html! {
        <article class="template-card" data-template-id={record.id.to_string()}>
            <div class="template-media">
                <img src={record.image.clone()} alt={record.title.clone()} loading="lazy" />
                <button type="button" class="btn btn-outline btn-sm template-preview">
                    { i18n.t("templates.buttons.preview") }
                </button>
            </div>
            <div class="template-body">
                <span class="badge">{ record.category.clone() }</span>
                <h3>{ record.title.clone() }</h3>
                <p>{ record.description.clone() }</p>
                <button type="button" class="btn btn-primary btn-block">
                    { i18n.t("templates.buttons.useTemplate") }
                </button>
            </div>
        </article>
    }
}

/// Template gallery. Mounted behind [`crate::components::RequireSession`].
#[function_component(TemplatesPage)]
pub fn templates_page() -> Html {
    let i18n = use_i18n();
    let locale = i18n.locale;
    let toaster = use_toaster();
    let navigator = use_navigator();

    let records = use_memo(i18n.clone(), |i18n| resolve_all(i18n.catalog()));
    let filter = use_state(FilterState::default);

    // Category labels are translated, so a selection does not survive a switch.
    {
        let filter = filter.clone();
        use_effect_with(locale, move |_| {
            if filter.category != CategoryFilter::All {
                filter.set(FilterState {
                    category: CategoryFilter::All,
                    ..(*filter).clone()
                });
            }
        });
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(query) = input_value(&e) {
                filter.set(FilterState {
                    query,
                    ..(*filter).clone()
                });
            }
        })
    };

    let on_logout = {
        let i18n = i18n.clone();
        Callback::from(move |()| match SessionGate::new(BrowserStore).logout(locale) {
            Ok(path) => {
                toaster.success(i18n.t("templates.logoutSuccess"), None);
                let target = Route::recognize(&path).unwrap_or_else(|| Route::home(locale));
                if let Some(nav) = &navigator {
                    nav.push(&target);
                }
            }
            Err(err) => {
                log::warn!("logout failed: {err}");
                toaster.error(i18n.t("login.errors.storage"));
            }
        })
    };

    let category_buttons = categories(&records)
        .into_iter()
        .map(|category| {
            let selected = filter.category == category;
            let label = match &category {
                CategoryFilter::All => i18n.t("templates.categories.all"),
                CategoryFilter::Named(name) => name.clone(),
            };
            let onclick = {
                let filter = filter.clone();
                let category = category.clone();
                Callback::from(move |_| {
                    filter.set(FilterState {
                        category: category.clone(),
                        ..(*filter).clone()
                    });
                })
            };
            html! {
                <button
                    type="button"
                    key={category.value().to_string()}
                    class={classes!("btn", "btn-sm", "rounded-full", if selected { "btn-primary" } else { "btn-outline" })}
                    aria-pressed={selected.to_string()}
                    {onclick}
                >
                    { label }
                </button>
            }
        })
        .collect::<Html>();

    let view = filter.apply(&records);
    let results = if view.is_empty() {
        html! {
            <div class="templates-empty" data-testid="templates-empty">
                <h3>{ i18n.t("templates.emptyState.title") }</h3>
                <p>{ i18n.t("templates.emptyState.description") }</p>
            </div>
        }
    } else {
        html! {
            <div class="templates-grid">
                { for view.iter().map(|record| html! {
                    <TemplateCard key={record.id} record={record.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="page page-templates">
            <Navbar variant={NavVariant::Gallery} {on_logout} />
            <main id="main" class="templates">
                <header class="section-header">
                    <h1 class="text-gradient">{ i18n.t("templates.pageTitle") }</h1>
                    <p>{ i18n.t("templates.pageSubtitle") }</p>
                </header>
                <div class="templates-filters">
                    <input
                        type="search"
                        class="input templates-search"
                        placeholder={i18n.t("templates.searchPlaceholder")}
                        value={filter.query.clone()}
                        oninput={on_search}
                    />
                    <div class="templates-categories" role="group">{ category_buttons }</div>
                </div>
                { results }
            </main>
        </div>
    }
}
