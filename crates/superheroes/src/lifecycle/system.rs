use crate::clients::{FightClient, HeroClient, VillainClient};
use crate::health::{self, HealthStatus};
use tracing::{error, info};

/// The runtime orchestrator for the superheroes system.
///
/// `SuperheroSystem` is responsible for:
/// - **Lifecycle management**: starting and stopping all stores
/// - **Dependency wiring**: the fight client needs the hero and villain
///   clients to draw opponents
/// - **Health reporting**: aggregating the per-service liveness probes
///
/// # Architecture
///
/// Three stores run as independent tasks:
/// - **Hero store**: hero records, plain resource operations
/// - **Villain store**: villain records, plain resource operations
/// - **Fight store**: fight outcomes; pairings are drawn through the hero
///   and villain clients before the insert
///
/// # Example
///
/// ```ignore
/// let system = SuperheroSystem::new();
///
/// seed::seed_heroes(&system.hero_client).await?;
/// seed::seed_villains(&system.villain_client).await?;
/// let fight = system.fight_client.perform_random_fight().await?;
///
/// system.shutdown().await?;
/// ```
pub struct SuperheroSystem {
    /// Client for the hero store
    pub hero_client: HeroClient,

    /// Client for the villain store
    pub villain_client: VillainClient,

    /// Client for the fight store (holds hero and villain client clones)
    pub fight_client: FightClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SuperheroSystem {
    /// Creates and starts the whole system.
    ///
    /// Heroes and villains come up first, then the fight client is built
    /// from their clients. All three store tasks are running when this
    /// returns.
    pub fn new() -> Self {
        let (hero_store, hero_client) = crate::hero_store::new();
        let (villain_store, villain_client) = crate::villain_store::new();
        let (fight_store, fight_generic) = crate::fight_store::new();

        let fight_client = FightClient::new(
            fight_generic,
            hero_client.clone(),
            villain_client.clone(),
        );

        let handles = vec![
            tokio::spawn(hero_store.run()),
            tokio::spawn(villain_store.run()),
            tokio::spawn(fight_store.run()),
        ];

        info!("Superheroes system started");

        Self {
            hero_client,
            villain_client,
            fight_client,
            handles,
        }
    }

    /// Ping every store and report its status.
    pub async fn health(&self) -> Vec<HealthStatus> {
        vec![
            health::ping("heroes", &self.hero_client).await,
            health::ping("villains", &self.villain_client).await,
            health::ping("fights", &self.fight_client).await,
        ]
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels; each store drains its
    /// queue and exits. Returns an error if any store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes every sender. The fight client holds
        // the only other clones of the hero and villain clients, so all
        // three channels close here.
        drop(self.fight_client);
        drop(self.hero_client);
        drop(self.villain_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for SuperheroSystem {
    fn default() -> Self {
        Self::new()
    }
}
