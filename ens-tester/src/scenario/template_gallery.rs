use anyhow::{Result, ensure};

use super::{LogicCheck, SETTLE_TIMEOUT, Scenario, ScenarioCtx, bundled_catalogs};
use ens_core::config::{SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
use ens_core::{CategoryFilter, Locale, categories, filter, resolve_all};

pub struct TemplateGalleryScenario;

const CARD: &str = "article.template-card";
const SEARCH: &str = "input.templates-search";

fn filter_matches_title_description_and_category() -> Result<()> {
    let catalogs = bundled_catalogs();
    for locale in Locale::ALL {
        let records = resolve_all(&catalogs.get(locale));

        let everything = filter(&records, "", &CategoryFilter::All);
        ensure!(everything.len() == records.len(), "{locale}: empty query must match all");

        let choices = categories(&records);
        ensure!(choices.first() == Some(&CategoryFilter::All), "{locale}: all comes first");
        for choice in &choices[1..] {
            let view = filter(&records, "", choice);
            ensure!(!view.is_empty(), "{locale}: {} matches nothing", choice.value());
            ensure!(
                view.iter().all(|record| record.category == choice.value()),
                "{locale}: {} leaked other categories",
                choice.value()
            );
        }

        let sushi = &records[4];
        let upper = sushi.title.to_uppercase();
        ensure!(
            filter(&records, &upper, &CategoryFilter::All).ids().contains(&sushi.id),
            "{locale}: search must ignore case"
        );
        ensure!(
            filter(&records, "zzzz-no-such-template", &CategoryFilter::All).is_empty(),
            "{locale}: unmatched query must be empty"
        );
    }
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for TemplateGalleryScenario {
    fn name(&self) -> &'static str {
        "template-gallery"
    }

    fn description(&self) -> &'static str {
        "Search and category filters narrow the six templates; no match shows the empty state"
    }

    fn logic_check(&self) -> Option<LogicCheck> {
        Some(filter_matches_title_description_and_category)
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/en").await?;
        page.storage_set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE).await?;

        page.open("/en/Templates").await?;
        page.wait_for_count(CARD, 6, SETTLE_TIMEOUT).await?;

        page.type_into(SEARCH, "sushi").await?;
        page.wait_for_count(CARD, 1, SETTLE_TIMEOUT).await?;

        page.type_into(SEARCH, "zzzz").await?;
        page.wait_for_count(CARD, 0, SETTLE_TIMEOUT).await?;
        page.wait_for_count("[data-testid='templates-empty']", 1, SETTLE_TIMEOUT).await?;

        page.storage_clear().await?;
        if ctx.verbose {
            println!("  🔎 Gallery filters narrowed 6 → 1 → 0");
        }
        Ok(())
    }
}
