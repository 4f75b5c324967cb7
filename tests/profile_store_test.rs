// ABOUTME: Integration tests for the session profile store
// ABOUTME: Verifies partial merges, wholesale collection replacement, snapshots and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan::models::{ActivityLevel, DietRestriction, Profile, ProfilePatch};
use fitplan::profile_store::ProfileStore;
use std::collections::BTreeSet;

#[test]
fn test_new_store_holds_default_profile() {
    let store = ProfileStore::new();
    assert_eq!(store.current(), Profile::default());
}

#[test]
fn test_merge_keeps_fields_from_other_steps() {
    let store = ProfileStore::new();
    store.merge(ProfilePatch {
        name: Some("Ada".into()),
        age: Some(36),
        activity_level: Some(ActivityLevel::Sedentary),
        ..ProfilePatch::default()
    });
    let snapshot = store.merge(ProfilePatch {
        meals_per_day: Some(4),
        ..ProfilePatch::default()
    });

    assert_eq!(snapshot.name, "Ada");
    assert_eq!(snapshot.age, 36);
    assert_eq!(snapshot.activity_level, Some(ActivityLevel::Sedentary));
    assert_eq!(snapshot.meals_per_day, 4);
    assert_eq!(store.current(), snapshot);
}

#[test]
fn test_last_selection_wins_for_sets() {
    let store = ProfileStore::new();
    store.merge(ProfilePatch {
        diet_restrictions: Some([DietRestriction::Keto, DietRestriction::Dash].into()),
        ..ProfilePatch::default()
    });
    let snapshot = store.merge(ProfilePatch {
        diet_restrictions: Some([DietRestriction::Vegan].into()),
        ..ProfilePatch::default()
    });
    assert_eq!(
        snapshot.diet_restrictions,
        BTreeSet::from([DietRestriction::Vegan])
    );
}

#[test]
fn test_snapshots_are_detached() {
    let store = ProfileStore::new();
    let before = store.current();
    store.merge(ProfilePatch {
        age: Some(30),
        ..ProfilePatch::default()
    });
    assert_eq!(before.age, 0);
    assert_eq!(store.current().age, 30);
}

#[test]
fn test_clones_share_the_profile_and_reset_clears_it() {
    let store = ProfileStore::new();
    let shared = store.clone();
    shared.merge(ProfilePatch {
        name: Some("Grace".into()),
        ..ProfilePatch::default()
    });
    assert_eq!(store.current().name, "Grace");

    store.reset();
    assert_eq!(shared.current(), Profile::default());
}

#[tokio::test]
async fn test_concurrent_merges_are_not_lost() {
    let store = ProfileStore::new();
    let name_writer = {
        let store = store.clone();
        tokio::spawn(async move {
            store.merge(ProfilePatch {
                name: Some("Ada".into()),
                ..ProfilePatch::default()
            })
        })
    };
    let meal_writer = {
        let store = store.clone();
        tokio::spawn(async move {
            store.merge(ProfilePatch {
                meals_per_day: Some(5),
                ..ProfilePatch::default()
            })
        })
    };
    name_writer.await.unwrap();
    meal_writer.await.unwrap();

    let profile = store.current();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.meals_per_day, 5);
}
