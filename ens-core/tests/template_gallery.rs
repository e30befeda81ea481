use ens_core::{Catalog, CategoryFilter, FilterState, Locale, categories, filter, resolve_all};
use serde_json::json;

fn catalog() -> Catalog {
    let item = |title: &str, description: &str, category: &str| {
        json!({ "title": title, "description": description, "category": category })
    };
    Catalog::from_value(
        Locale::En,
        json!({
            "templates": {
                "items": {
                    "fineDining": item("Fine Dining", "Elegant menu for upscale venues", "Restaurant"),
                    "modernCafe": item("Modern Cafe", "Minimal layout for coffee shops", "Cafe"),
                    "fastFood": item("Fast Food", "Bold combos and quick ordering", "Restaurant"),
                    "pizza": item("Pizzeria", "Build-your-own pizza sections", "Restaurant"),
                    "sushi": item("Sushi Bar", "Photo-first Japanese menu", "Asian"),
                    "bakery": item("Bakery", "Warm design for pastries and cakes", "Cafe")
                }
            }
        }),
    )
    .unwrap()
}

#[test]
fn empty_query_and_all_returns_everything_in_order() {
    let records = resolve_all(&catalog());
    let view = filter(&records, "", &CategoryFilter::All);
    assert_eq!(view.ids(), [1, 2, 3, 4, 5, 6]);
    assert!(!view.is_empty());
}

#[test]
fn unmatched_query_yields_empty_view() {
    let records = resolve_all(&catalog());
    let state = FilterState {
        query: "tacos".into(),
        category: CategoryFilter::All,
    };
    assert!(state.apply(&records).is_empty());
}

#[test]
fn category_selects_exact_subset() {
    let records = resolve_all(&catalog());
    let cafe = CategoryFilter::from_value("Cafe");
    assert_eq!(filter(&records, "", &cafe).ids(), [2, 6]);
    assert_eq!(filter(&records, "", &CategoryFilter::Named("Restaurant".into())).ids(), [1, 3, 4]);
    assert!(filter(&records, "", &CategoryFilter::Named("restaurant".into())).is_empty());
}

#[test]
fn query_and_category_combine() {
    let records = resolve_all(&catalog());
    let restaurant = CategoryFilter::from_value("Restaurant");
    assert_eq!(filter(&records, "PIZZA", &restaurant).ids(), [4]);
    assert!(filter(&records, "coffee", &restaurant).is_empty());
}

#[test]
fn categories_lead_with_all() {
    let records = resolve_all(&catalog());
    let values: Vec<String> = categories(&records)
        .iter()
        .map(|category| category.value().to_string())
        .collect();
    assert_eq!(values, ["all", "Restaurant", "Cafe", "Asian"]);
    assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
}
