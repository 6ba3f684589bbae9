use entity_store::EntityClient;
use superheroes::lifecycle::SuperheroSystem;
use superheroes::model::{VillainCreate, VillainId};
use superheroes::seed;
use superheroes::villain_store::VillainError;

fn sonic_candidate() -> VillainCreate {
    VillainCreate {
        name: "Sonic".to_string(),
        other_name: None,
        level: 7,
        picture: Some("https://example.com/sonic.png".to_string()),
        powers: Some("speed".to_string()),
    }
}

/// Full villain lifecycle against the running system: insert, read back,
/// update in place, delete, with the count tracking every step.
#[tokio::test]
async fn test_villain_lifecycle() {
    let system = SuperheroSystem::new();

    let baseline = seed::seed_villains(&system.villain_client)
        .await
        .expect("Failed to seed villains");
    assert_eq!(system.villain_client.count().await.unwrap(), baseline);

    // Insert
    let created = system
        .villain_client
        .create_villain(sonic_candidate())
        .await
        .expect("Failed to create villain");
    assert_eq!(system.villain_client.count().await.unwrap(), baseline + 1);

    // Read back: equal to the candidate except for the assigned id
    let fetched = system
        .villain_client
        .find(created.id)
        .await
        .expect("Failed to get villain")
        .expect("Villain not found");
    assert_eq!(fetched.name, "Sonic");
    assert_eq!(fetched.other_name, None);
    assert_eq!(fetched.level, 7);
    assert_eq!(fetched.picture.as_deref(), Some("https://example.com/sonic.png"));
    assert_eq!(fetched.powers.as_deref(), Some("speed"));

    // Update in place: every field but the id is replaceable
    let mut revised = fetched.clone();
    revised.name = "Sonic 2".to_string();
    revised.other_name = Some("Sonic faster".to_string());
    revised.level = 8;
    revised.powers = Some("super speed".to_string());

    let updated = system
        .villain_client
        .update_villain(revised.clone())
        .await
        .expect("Failed to update villain");
    assert_eq!(updated, revised);

    let fetched = system
        .villain_client
        .find(created.id)
        .await
        .unwrap()
        .expect("Villain disappeared after update");
    assert_eq!(fetched.level, 8);
    assert_eq!(system.villain_client.count().await.unwrap(), baseline + 1);

    // Delete, then the id is gone and the count is back to baseline
    assert!(system.villain_client.delete(created.id).await.unwrap());
    assert_eq!(system.villain_client.count().await.unwrap(), baseline);
    assert!(system
        .villain_client
        .find(created.id)
        .await
        .unwrap()
        .is_none());

    // Deleting again is a no-op, not an error
    assert!(!system.villain_client.delete(created.id).await.unwrap());

    system.shutdown().await.expect("Failed to shutdown system");
}

/// An arbitrary unknown id answers with absence, not an error.
#[tokio::test]
async fn test_unknown_villain_is_no_content() {
    let system = SuperheroSystem::new();

    let missing = system
        .villain_client
        .find(VillainId(987_654_321))
        .await
        .expect("Lookup itself should succeed");
    assert!(missing.is_none());

    system.shutdown().await.unwrap();
}

/// An invalid candidate is rejected with field detail and nothing persists.
#[tokio::test]
async fn test_invalid_villain_is_rejected() {
    let system = SuperheroSystem::new();
    let baseline = seed::seed_villains(&system.villain_client).await.unwrap();

    let mut invalid = sonic_candidate();
    invalid.level = -1;

    let result = system.villain_client.create_villain(invalid).await;
    match result {
        Err(VillainError::Validation(e)) => {
            assert_eq!(e.violations.len(), 1);
            assert_eq!(e.violations[0].field, "level");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(system.villain_client.count().await.unwrap(), baseline);

    // Updating an existing record with bad data is rejected the same way
    let victim = system
        .villain_client
        .find_random_villain()
        .await
        .unwrap()
        .expect("seeded roster should not be empty");
    let mut bad_update = victim.clone();
    bad_update.name = "X".to_string();
    let result = system.villain_client.update_villain(bad_update).await;
    assert!(matches!(result, Err(VillainError::Validation(_))));

    let untouched = system
        .villain_client
        .find(victim.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched, victim);

    system.shutdown().await.unwrap();
}

/// Random selection only ever answers persisted villains.
#[tokio::test]
async fn test_random_villain_comes_from_roster() {
    let system = SuperheroSystem::new();

    // Empty roster: absence, not an error
    assert!(system
        .villain_client
        .find_random_villain()
        .await
        .unwrap()
        .is_none());

    let baseline = seed::seed_villains(&system.villain_client).await.unwrap();
    let roster = system.villain_client.list(0, baseline).await.unwrap();
    assert_eq!(roster.len(), baseline);

    for _ in 0..20 {
        let picked = system
            .villain_client
            .find_random_villain()
            .await
            .unwrap()
            .expect("roster is not empty");
        assert!(roster.contains(&picked));
    }

    system.shutdown().await.unwrap();
}

/// Pages partition the roster; out-of-range pages are empty.
#[tokio::test]
async fn test_villain_pagination() {
    let system = SuperheroSystem::new();
    let baseline = seed::seed_villains(&system.villain_client).await.unwrap();

    let page_size = 3;
    let mut seen = Vec::new();
    let mut page = 0;
    loop {
        let chunk = system.villain_client.list(page, page_size).await.unwrap();
        if chunk.is_empty() {
            break;
        }
        seen.extend(chunk);
        page += 1;
    }
    assert_eq!(seen.len(), baseline);

    // Far out of range still answers an empty page
    assert!(system
        .villain_client
        .list(10_000, page_size)
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

/// Concurrent creation: every insert lands, ids stay unique.
#[tokio::test]
async fn test_concurrent_hero_creation() {
    use superheroes::model::HeroCreate;

    let system = SuperheroSystem::new();
    let baseline = seed::seed_heroes(&system.hero_client).await.unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let hero_client = system.hero_client.clone();
        handles.push(tokio::spawn(async move {
            hero_client
                .create_hero(HeroCreate {
                    name: format!("Clone Trooper {i}"),
                    other_name: None,
                    level: 3,
                    picture: None,
                    powers: None,
                })
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let created = handle.await.unwrap().expect("create should succeed");
        ids.push(created.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10, "every clone should get its own id");
    assert_eq!(system.hero_client.count().await.unwrap(), baseline + 10);

    system.shutdown().await.unwrap();
}

/// Health probes report every store up, with its current count.
#[tokio::test]
async fn test_health_reports_all_stores() {
    let system = SuperheroSystem::new();
    let heroes = seed::seed_heroes(&system.hero_client).await.unwrap();

    let statuses = system.health().await;
    assert_eq!(statuses.len(), 3);
    for status in &statuses {
        assert!(status.up, "{} should be up", status.service);
    }
    let hero_status = statuses.iter().find(|s| s.service == "heroes").unwrap();
    assert_eq!(hero_status.count, Some(heroes));
    let fight_status = statuses.iter().find(|s| s.service == "fights").unwrap();
    assert_eq!(fight_status.count, Some(0));

    system.shutdown().await.unwrap();
}

/// End to end: seeded rosters, one random fight, outcome persisted.
#[tokio::test]
async fn test_full_random_fight() {
    let system = SuperheroSystem::new();
    seed::seed_heroes(&system.hero_client).await.unwrap();
    seed::seed_villains(&system.villain_client).await.unwrap();

    let fight = system
        .fight_client
        .perform_random_fight()
        .await
        .expect("Fight should succeed with seeded rosters");

    assert!(!fight.winner_name.is_empty());
    assert!(!fight.loser_name.is_empty());
    assert!(fight.winner_level >= fight.loser_level);

    let recorded = system
        .fight_client
        .find(fight.id)
        .await
        .unwrap()
        .expect("Fight should be persisted");
    assert_eq!(recorded, fight);
    assert_eq!(system.fight_client.count().await.unwrap(), 1);

    system.shutdown().await.unwrap();
}
