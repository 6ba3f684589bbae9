use entity_store::mock::MockStore;
use entity_store::{EntityClient, StoreError};
use superheroes::clients::{FightClient, HeroClient, VillainClient};
use superheroes::fight_store::{self, FightError};
use superheroes::model::{Fighters, Hero, HeroId, Villain, VillainId};

fn hero(name: &str, level: i32) -> Hero {
    Hero {
        id: HeroId(1),
        name: name.to_string(),
        other_name: None,
        level,
        picture: None,
        powers: None,
    }
}

fn villain(name: &str, level: i32) -> Villain {
    Villain {
        id: VillainId(1),
        name: name.to_string(),
        other_name: None,
        level,
        picture: None,
        powers: None,
    }
}

/// Real fight store with mocked hero and villain rosters. The mocks pin the
/// random draws, so the outcome is fully deterministic.
#[tokio::test]
async fn test_random_fight_with_mocked_rosters() {
    let mut hero_mock = MockStore::<Hero>::new();
    let mut villain_mock = MockStore::<Villain>::new();

    // FightClient::perform_random_fight will draw one fighter from each side
    hero_mock
        .expect_find_random()
        .return_ok(Some(hero("Super Baguette", 42)));
    villain_mock
        .expect_find_random()
        .return_ok(Some(villain("Super Chocolatine", 6)));

    let hero_client = HeroClient::new(hero_mock.client());
    let villain_client = VillainClient::new(villain_mock.client());

    // Real fight store, spawned like production
    let (fight_store, fight_generic) = fight_store::new();
    let fight_client = FightClient::new(fight_generic, hero_client, villain_client);
    let store_handle = tokio::spawn(fight_store.run());

    let fight = fight_client
        .perform_random_fight()
        .await
        .expect("Fight failed");

    assert_eq!(fight.winner_name, "Super Baguette");
    assert_eq!(fight.winner_level, 42);
    assert_eq!(fight.loser_name, "Super Chocolatine");
    assert_eq!(fight.loser_level, 6);

    // The outcome is persisted and retrievable
    let recorded = fight_client.find(fight.id).await.unwrap().unwrap();
    assert_eq!(recorded, fight);

    hero_mock.verify();
    villain_mock.verify();

    drop(fight_client);
    store_handle.await.unwrap();
}

/// An empty hero roster means there is nobody to fight.
#[tokio::test]
async fn test_random_fight_without_heroes() {
    let mut hero_mock = MockStore::<Hero>::new();
    let villain_mock = MockStore::<Villain>::new();

    hero_mock.expect_find_random().return_ok(None);

    let hero_client = HeroClient::new(hero_mock.client());
    let villain_client = VillainClient::new(villain_mock.client());

    let (fight_store, fight_generic) = fight_store::new();
    let fight_client = FightClient::new(fight_generic, hero_client, villain_client);
    tokio::spawn(fight_store.run());

    let result = fight_client.perform_random_fight().await;
    assert!(matches!(result, Err(FightError::NoFighters)));

    // The villain roster was never consulted
    hero_mock.verify();
    villain_mock.verify();

    // Nothing was persisted
    assert_eq!(fight_client.count().await.unwrap(), 0);
}

/// A failing hero service keeps its identity in the error.
#[tokio::test]
async fn test_random_fight_with_hero_service_down() {
    let mut hero_mock = MockStore::<Hero>::new();
    let villain_mock = MockStore::<Villain>::new();

    hero_mock.expect_find_random().return_err(StoreError::Closed);

    let hero_client = HeroClient::new(hero_mock.client());
    let villain_client = VillainClient::new(villain_mock.client());

    let (fight_store, fight_generic) = fight_store::new();
    let fight_client = FightClient::new(fight_generic, hero_client, villain_client);
    tokio::spawn(fight_store.run());

    let result = fight_client.perform_random_fight().await;
    assert!(matches!(result, Err(FightError::HeroService(_))));

    hero_mock.verify();
}

/// Explicit fighters skip the draw entirely; the store still decides and
/// records the outcome.
#[tokio::test]
async fn test_explicit_fighters() {
    let hero_mock = MockStore::<Hero>::new();
    let villain_mock = MockStore::<Villain>::new();

    let hero_client = HeroClient::new(hero_mock.client());
    let villain_client = VillainClient::new(villain_mock.client());

    let (fight_store, fight_generic) = fight_store::new();
    let fight_client = FightClient::new(fight_generic, hero_client, villain_client);
    tokio::spawn(fight_store.run());

    let fighters = Fighters {
        hero: hero("Sidekick", 2),
        villain: villain("Darth Invader", 40),
    };
    let fight = fight_client.perform_fight(fighters).await.unwrap();

    assert_eq!(fight.winner_name, "Darth Invader");
    assert_eq!(fight.loser_name, "Sidekick");
    assert_eq!(fight_client.count().await.unwrap(), 1);

    // No roster was consulted
    hero_mock.verify();
    villain_mock.verify();
}
