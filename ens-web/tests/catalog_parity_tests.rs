use ens_core::{LandingContent, Locale, TEMPLATES, resolve_all};
use ens_web::i18n::{AR_SOURCE, EN_SOURCE, catalogs};
use serde_json::Value;
use std::collections::BTreeSet;

fn leaf_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_paths(child, &path, out);
            }
        }
        _ => {
            out.insert(prefix.to_string());
        }
    }
}

fn paths(source: &str) -> BTreeSet<String> {
    let root: Value = serde_json::from_str(source).expect("bundled catalog parses");
    let mut out = BTreeSet::new();
    leaf_paths(&root, "", &mut out);
    out
}

#[test]
fn both_catalogs_define_the_same_keys() {
    let ar = paths(AR_SOURCE);
    let en = paths(EN_SOURCE);
    let only_ar: Vec<_> = ar.difference(&en).collect();
    let only_en: Vec<_> = en.difference(&ar).collect();
    assert!(only_ar.is_empty(), "missing in en: {only_ar:?}");
    assert!(only_en.is_empty(), "missing in ar: {only_en:?}");
}

#[test]
fn every_template_resolves_in_both_locales() {
    for locale in Locale::ALL {
        let catalog = catalogs().get(locale);
        let records = resolve_all(&catalog);
        assert_eq!(records.len(), TEMPLATES.len());
        for record in records {
            assert!(!record.title.starts_with("templates."), "{locale}: {}", record.title);
            assert!(!record.category.starts_with("templates."), "{locale}: {}", record.category);
        }
    }
}

#[test]
fn landing_lists_decode_in_both_locales() {
    for locale in Locale::ALL {
        let content = LandingContent::from_catalog(&catalogs().get(locale));
        assert!(!content.partners.is_empty(), "{locale}");
        assert!(!content.features.is_empty(), "{locale}");
        assert_eq!(content.steps.len(), 3, "{locale}");
        assert_eq!(content.tiers.len(), 3, "{locale}");
    }
}
