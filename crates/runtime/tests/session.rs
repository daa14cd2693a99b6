use build_core::{
    ArmorSlot, BuildError, EngineConfig, Item, ItemCategory, ItemKind, SlotError, StatField,
    StepField, TraitAmount, TraitData, WeightClass,
};
use runtime::{BuildSession, CatalogOracleImpl, OracleManager, SessionError};

fn oracles() -> OracleManager {
    let catalog = CatalogOracleImpl::from_items([
        Item::new("leto_helm", "Leto Helmet", ItemKind::Armor(ArmorSlot::Helm))
            .with_stat(StatField::Armor, 14.0)
            .with_stat(StatField::Weight, 9.0),
        Item::new("leto_torso", "Leto Armor", ItemKind::Armor(ArmorSlot::Torso))
            .with_stat(StatField::Weight, 26.0),
        Item::new("wrangler", "Wrangler", ItemKind::Weapon)
            .with_link(ItemCategory::Mod, "Hot Shot"),
        Item::new("hot_shot", "Hot Shot", ItemKind::Mod),
        Item::new("challenger", "Challenger", ItemKind::Archetype)
            .with_link(ItemCategory::Trait, "Strong Back"),
        Item::new(
            "strong_back",
            "Strong Back",
            ItemKind::Trait(TraitData::new().with_weight_thresholds(vec![1.5])),
        ),
        Item::new(
            "vigor",
            "Vigor",
            ItemKind::Trait(TraitData::new().with_step(StepField::HealthStep, 3.0)),
        ),
    ])
    .expect("fixture catalog");
    OracleManager::new(catalog, EngineConfig::default())
}

#[test]
fn new_session_starts_empty() {
    let session = BuildSession::new(oracles());
    assert_eq!(session.build().name, "My Build");
    assert_eq!(session.stats().health, 100.0);
    assert_eq!(session.query(), "name=My%20Build");
    assert!(session.records().is_empty());
}

#[test]
fn equip_recomputes_links_and_stats() {
    let mut session = BuildSession::new(oracles());

    session.equip(ItemCategory::Helm, 0, "leto_helm").expect("equip helm");
    session.equip(ItemCategory::Torso, 0, "leto_torso").expect("equip torso");
    assert_eq!(session.stats().weight, 35.0);
    assert_eq!(session.stats().weight_class, WeightClass::Medium);

    session.equip(ItemCategory::Weapon, 2, "wrangler").expect("equip weapon");
    assert_eq!(
        session.build().items.mods().get(2).map(|m| m.id.as_str()),
        Some("hot_shot")
    );

    // Strong Back at max amount removes 15 weight.
    session
        .equip(ItemCategory::Archetype, 0, "challenger")
        .expect("equip archetype");
    assert_eq!(session.stats().weight_class, WeightClass::Light);
    assert_eq!(
        session.build().items.traits().get(0).map(|t| t.amount),
        Some(TraitAmount::MAX)
    );
}

#[test]
fn unequip_keeps_derived_items() {
    let mut session = BuildSession::new(oracles());
    session.equip(ItemCategory::Weapon, 0, "wrangler").unwrap();
    session.unequip(ItemCategory::Weapon, 0).unwrap();

    assert!(session.build().items.weapons().get(0).is_none());
    assert_eq!(
        session.build().items.mods().get(0).map(|m| m.id.as_str()),
        Some("hot_shot")
    );
}

#[test]
fn invalid_edits_leave_build_unchanged() {
    let mut session = BuildSession::new(oracles());
    session.equip(ItemCategory::Helm, 0, "leto_helm").unwrap();
    let before = session.build().clone();

    assert_eq!(
        session.equip(ItemCategory::Ring, 0, "missing"),
        Err(SessionError::UnknownItem("missing".into()))
    );
    assert_eq!(
        session.equip(ItemCategory::Weapon, 0, "hot_shot"),
        Err(SessionError::CategoryMismatch {
            id: "hot_shot".into(),
            expected: ItemCategory::Weapon,
            actual: ItemCategory::Mod,
        })
    );

    let err = session
        .equip(ItemCategory::Weapon, 3, "wrangler")
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::Slot {
            category: ItemCategory::Weapon,
            source: SlotError::OutOfRange {
                index: 3,
                capacity: 3
            },
        }
    );
    assert_eq!(err.error_code(), "SLOT_OUT_OF_RANGE");

    assert_eq!(
        session.set_trait_amount(5, 3),
        Err(SessionError::EmptyTraitSlot(5))
    );
    assert_eq!(session.build(), &before);
}

#[test]
fn trait_amount_scales_health() {
    let mut session = BuildSession::new(oracles());
    session.equip(ItemCategory::Trait, 0, "vigor").unwrap();
    assert_eq!(
        session.build().items.traits().get(0).map(|t| t.amount),
        Some(TraitAmount::MAX)
    );
    assert_eq!(session.stats().health, 130.0);

    session.set_trait_amount(0, 4).unwrap();
    assert_eq!(session.stats().health, 112.0);

    session.set_trait_amount(0, 0).unwrap();
    assert_eq!(session.stats().health, 103.0);

    session.set_trait_amount(0, 200).unwrap();
    assert_eq!(session.stats().health, 130.0);
}

#[test]
fn query_and_records_round_trip_through_session() {
    let mut session = BuildSession::from_query(
        oracles(),
        "name=Tank&helm=leto_helm&weapon=,wrangler&trait=vigor;2",
    )
    .expect("decode");
    session.rename("Bruiser");
    let query = session.query();
    let rows = session.records();

    let mut reloaded = BuildSession::new(oracles());
    reloaded.load_query(&query).unwrap();
    assert_eq!(reloaded.build(), session.build());

    let mut restored = BuildSession::new(oracles());
    restored.load_records("Bruiser", rows);
    assert_eq!(restored.build(), session.build());
    assert_eq!(restored.stats(), session.stats());

    assert!(matches!(
        reloaded.load_query("gem=ruby"),
        Err(SessionError::Decode(_))
    ));
    assert_eq!(reloaded.build(), session.build());
}
