//! Demo entry point: boot the system, seed the rosters, run one random
//! fight, report health, shut down.

use superheroes::lifecycle::{setup_tracing, SuperheroSystem};
use superheroes::seed;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the superheroes application");

    // Create the entire system (starts all stores)
    let system = SuperheroSystem::new();

    let span = tracing::info_span!("roster_seeding");
    async {
        info!("Seeding starter rosters");
        let heroes = seed::seed_heroes(&system.hero_client)
            .await
            .map_err(|e| e.to_string())?;
        let villains = seed::seed_villains(&system.villain_client)
            .await
            .map_err(|e| e.to_string())?;
        info!(heroes, villains, "Rosters ready");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    for status in system.health().await {
        info!(
            service = status.service,
            up = status.up,
            count = status.count,
            "Health"
        );
    }

    // Run one fight through the whole pipeline: random hero, random
    // villain, outcome persisted in the fight store.
    let span = tracing::info_span!("fight_processing");
    let fight_result = async {
        info!("Performing a random fight");
        system.fight_client.perform_random_fight().await
    }
    .instrument(span)
    .await;

    match fight_result {
        Ok(fight) => info!(
            winner = %fight.winner_name,
            loser = %fight.loser_name,
            "Fight decided"
        ),
        Err(e) => error!(error = %e, "Fight failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
