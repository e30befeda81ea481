use ens_core::{
    CatalogSet, Direction, Lifecycle, Locale, PresentationContext, ReadinessGate,
    RecordingSurface, SyncOutcome,
};
use std::sync::Arc;

const AR: &str = r#"{ "hero": { "cta": "ابدأ الآن" } }"#;
const EN: &str = r#"{ "hero": { "cta": "Start now" } }"#;

fn context() -> PresentationContext<RecordingSurface> {
    PresentationContext::new(
        CatalogSet::from_sources(AR, EN),
        RecordingSurface::default(),
    )
}

#[test]
fn nothing_is_written_before_initialize() {
    let ctx = context();
    assert_eq!(ctx.lifecycle(), Lifecycle::Pending);
    assert_eq!(ctx.surface().writes, 0);
    assert_eq!(ctx.locale(), Locale::Ar);
}

#[test]
fn initialize_writes_even_for_default_locale() {
    let mut ctx = context();
    assert_eq!(ctx.initialize(Locale::Ar), SyncOutcome::Changed);
    assert_eq!(ctx.surface().dir, Some(Direction::Rtl));
    assert_eq!(ctx.surface().writes, 1);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut ctx = context();
    ctx.initialize(Locale::En);
    let after_first = ctx.surface().clone();
    assert_eq!(ctx.update(Locale::En), SyncOutcome::Unchanged);
    assert_eq!(ctx.surface(), &after_first);
    assert_eq!(ctx.direction(), Direction::Ltr);
}

#[test]
fn toggling_twice_restores_direction_and_catalog() {
    let mut ctx = context();
    ctx.initialize(Locale::Ar);
    let original = ctx.catalog();

    assert!(ctx.update(Locale::Ar.toggled()).changed());
    assert_eq!(ctx.surface().dir, Some(Direction::Ltr));
    assert_eq!(ctx.catalog().t("hero.cta"), "Start now");

    assert!(ctx.update(Locale::Ar.toggled().toggled()).changed());
    assert_eq!(ctx.surface().lang, Some(Locale::Ar));
    assert_eq!(ctx.surface().dir, Some(Direction::Rtl));
    assert!(Arc::ptr_eq(&original, &ctx.catalog()));
}

#[test]
fn updates_after_teardown_are_ignored() {
    let mut ctx = context();
    ctx.initialize(Locale::Ar);
    ctx.teardown();
    assert_eq!(ctx.update(Locale::En), SyncOutcome::Unchanged);
    assert_eq!(ctx.surface().lang, Some(Locale::Ar));
}

#[test]
fn readiness_follows_first_sync() {
    let mut ctx = context();
    let mut gate = ReadinessGate::new();
    gate.mark_resolved();
    assert!(!gate.is_ready());
    if ctx.initialize(Locale::En).changed() {
        gate.mark_synchronized();
    }
    assert!(gate.is_ready());
    ctx.update(Locale::Ar);
    assert!(gate.is_ready());
}

#[test]
fn failed_write_is_retried_on_next_update() {
    let mut ctx = PresentationContext::new(
        CatalogSet::from_sources(AR, EN),
        RecordingSurface {
            reject_next: 1,
            ..RecordingSurface::default()
        },
    );
    assert_eq!(ctx.initialize(Locale::En), SyncOutcome::Changed);
    assert_eq!(ctx.surface().writes, 0);
    assert_eq!(ctx.surface().lang, None);
    assert_eq!(ctx.locale(), Locale::En);
    assert_eq!(ctx.catalog().t("hero.cta"), "Start now");

    assert_eq!(ctx.update(Locale::En), SyncOutcome::Changed);
    assert_eq!(ctx.surface().lang, Some(Locale::En));
    assert_eq!(ctx.surface().dir, Some(Direction::Ltr));
    assert_eq!(ctx.update(Locale::En), SyncOutcome::Unchanged);
    assert_eq!(ctx.surface().writes, 1);
}
