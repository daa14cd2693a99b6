use build_core::{
    ArmorSlot, BuildEngine, BuildState, CatalogOracle, CatalogSnapshot, DecodeError, EngineConfig,
    Item, ItemCategory, ItemKind, ResistanceKind, StatField, StepField, TraitAmount, TraitData,
    WeightClass, WeightClassThresholds, aggregate, decode_query, encode, resolve,
};

fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(vec![
        Item::new("leto_helm", "Leto Helmet", ItemKind::Armor(ArmorSlot::Helm))
            .with_stat(StatField::Armor, 20.0)
            .with_stat(StatField::Weight, 8.0)
            .with_stat(StatField::Resistance(ResistanceKind::Fire), 3.0),
        Item::new("leto_torso", "Leto Armor", ItemKind::Armor(ArmorSlot::Torso))
            .with_stat(StatField::Armor, 80.0)
            .with_stat(StatField::ArmorPercent, 0.1)
            .with_stat(StatField::Weight, 17.0),
        Item::new("mother_heart", "Mother's Heart", ItemKind::Amulet)
            .with_stat(StatField::HealthCap, 0.9),
        Item::new("blood_ring", "Blood Ring", ItemKind::Ring).with_stat(StatField::HealthCap, 0.8),
        Item::new("wrangler", "Wrangler", ItemKind::Weapon)
            .with_link(ItemCategory::Mod, "Hot Shot")
            .with_stat(StatField::Weight, 5.0),
        Item::new("hot_shot", "Hot Shot", ItemKind::Mod),
        Item::new("sorrow", "Sorrow", ItemKind::Weapon),
        Item::new("eulogy", "Eulogy", ItemKind::Mod).with_link(ItemCategory::Weapon, "Sorrow"),
        Item::new("challenger", "Challenger", ItemKind::Archetype)
            .with_link(ItemCategory::Trait, "Strong Back"),
        Item::new(
            "strong_back",
            "Strong Back",
            ItemKind::Trait(TraitData::new().with_weight_thresholds(vec![1.0])),
        ),
        Item::new(
            "bulwark",
            "Bulwark",
            ItemKind::Trait(TraitData::new().with_step(StepField::ArmorStep, 5.0)),
        ),
    ])
    .expect("fixture catalog is valid")
}

// ============================================================================
// Codec
// ============================================================================

#[test]
fn decode_encode_round_trip_preserves_positions() {
    let catalog = catalog();
    let query = "name=Round%20Trip&helm=leto_helm&weapon=,sorrow&mod=,,hot_shot&trait=bulwark;3,,strong_back;10";
    let build = decode_query(&catalog, query).expect("known categories decode");

    let encoded = encode(&build);
    let again = decode_query(&catalog, &encoded).expect("encoded query decodes");
    assert_eq!(again, build);
    assert_eq!(encode(&again), encoded);
}

#[test]
fn unknown_category_produces_no_build() {
    let catalog = catalog();
    let result = decode_query(&catalog, "helm=leto_helm&weapon=wrangler&bogus=1");
    assert_eq!(result, Err(DecodeError::UnknownCategory("bogus".into())));
}

// ============================================================================
// Link resolution
// ============================================================================

#[test]
fn resolve_is_idempotent_in_both_link_directions() {
    let catalog = catalog();
    let build = decode_query(&catalog, "weapon=wrangler&mod=,eulogy&archetype=challenger")
        .expect("decode");

    let once = resolve(&catalog, build);
    assert_eq!(
        once.items.mods().get(0).map(|m| m.id.as_str()),
        Some("hot_shot")
    );
    assert_eq!(
        once.items.weapons().get(1).map(|w| w.id.as_str()),
        Some("sorrow")
    );

    let twice = resolve(&catalog, once.clone());
    assert_eq!(twice, once);
}

#[test]
fn archetype_raises_existing_trait_to_max_without_duplicating() {
    let catalog = catalog();
    let build =
        decode_query(&catalog, "archetype=challenger&trait=bulwark;2,strong_back;4").expect("decode");

    let resolved = resolve(&catalog, build);
    let traits: Vec<_> = resolved
        .items
        .traits()
        .values()
        .map(|t| (t.item.id.as_str(), t.amount))
        .collect();
    assert_eq!(
        traits,
        vec![
            ("bulwark", TraitAmount::clamped(2)),
            ("strong_back", TraitAmount::MAX)
        ]
    );
}

#[test]
fn unequipping_parent_keeps_derived_items() {
    let catalog = catalog();
    let resolved = resolve(
        &catalog,
        decode_query(&catalog, "weapon=wrangler").expect("decode"),
    );

    let mut edited = resolved.clone();
    edited
        .items
        .sequence_mut(ItemCategory::Weapon)
        .expect("weapon arena")
        .set(0, None)
        .expect("slot 0 exists");

    let resolved_again = resolve(&catalog, edited);
    assert!(resolved_again.items.weapons().get(0).is_none());
    assert_eq!(
        resolved_again.items.mods().get(0).map(|m| m.id.as_str()),
        Some("hot_shot")
    );
}

// ============================================================================
// Stat aggregation
// ============================================================================

#[test]
fn armor_formula_boundary() {
    let catalog = catalog();
    let mut build = decode_query(&catalog, "trait=bulwark;3").expect("decode");
    build.items.torso = Some(
        Item::new("plain", "Plain", ItemKind::Armor(ArmorSlot::Torso))
            .with_stat(StatField::Armor, 100.0)
            .with_stat(StatField::ArmorPercent, 0.1),
    );

    let report = aggregate(&build, &WeightClassThresholds::default());
    assert_eq!(report.armor, 125.0);
}

#[test]
fn health_uses_the_lower_cap_only() {
    let catalog = catalog();
    let build = decode_query(&catalog, "amulet=mother_heart&ring=blood_ring").expect("decode");

    assert!((build_core::stats::health_cap_reduction(&build) - 0.2).abs() < 1e-12);
    let report = aggregate(&build, &WeightClassThresholds::default());
    assert_eq!(report.health, 20.0);
}

#[test]
fn weight_equal_to_light_bound_stays_light() {
    let catalog = catalog();
    // 8 + 17 = 25 exactly.
    let build = decode_query(&catalog, "helm=leto_helm&torso=leto_torso").expect("decode");
    let report = aggregate(&build, &WeightClassThresholds::default());
    assert_eq!(report.weight, 25.0);
    assert_eq!(report.weight_class, WeightClass::Light);

    // +5 from the weapon, −1 × 10 from the archetype's trait.
    let engine = BuildEngine::new(&catalog, EngineConfig::default());
    let heavier = engine
        .evaluate("helm=leto_helm&torso=leto_torso&weapon=wrangler")
        .expect("evaluate");
    assert_eq!(heavier.stats.weight_class, WeightClass::Medium);

    let relieved = engine
        .evaluate("helm=leto_helm&torso=leto_torso&weapon=wrangler&archetype=challenger")
        .expect("evaluate");
    assert_eq!(relieved.stats.weight, 30.0);
    assert_eq!(relieved.stats.weight_class, WeightClass::Light);
}

#[test]
fn empty_build_evaluates_to_bases() {
    let catalog = catalog();
    let report = aggregate(&BuildState::default(), &WeightClassThresholds::default());
    assert_eq!(report.armor, 0.0);
    assert_eq!(report.health, 100.0);
    assert_eq!(report.stamina, 100.0);
    assert_eq!(report.weight, 0.0);
    assert_eq!(report.weight_class, WeightClass::Light);
    assert!(catalog.item("leto_helm").is_some());
}

#[test]
fn resistances_are_not_rounded() {
    let catalog = CatalogSnapshot::new(vec![
        Item::new("r", "Ring", ItemKind::Ring)
            .with_stat(StatField::Resistance(ResistanceKind::Toxin), 1.0 / 3.0),
    ])
    .expect("catalog");
    let build = decode_query(&catalog, "ring=r").expect("decode");
    let report = aggregate(&build, &WeightClassThresholds::default());
    assert_eq!(report.resistances.toxin, 1.0 / 3.0);
}

#[cfg(feature = "serde")]
#[test]
fn evaluation_serializes_to_json() {
    let catalog = catalog();
    let engine = BuildEngine::new(&catalog, EngineConfig::default());
    let evaluation = engine.evaluate("weapon=wrangler").expect("evaluate");

    let json = serde_json::to_value(&evaluation).expect("serialize");
    assert_eq!(json["stats"]["weight_class"], "LIGHT");
    assert_eq!(json["build"]["items"]["mods"][0]["id"], "hot_shot");
    assert_eq!(json["query"], "name=My%20Build&weapon=wrangler&mod=hot_shot");
}
