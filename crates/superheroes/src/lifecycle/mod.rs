//! # System Lifecycle & Orchestration
//!
//! Individual stores are simple; wiring them together is where the
//! complexity lives. This module is the conductor:
//!
//! 1. **Store creation** - instantiate the three stores and their clients
//! 2. **Dependency wiring** - hand the hero and villain clients to the
//!    fight client
//! 3. **Lifecycle management** - spawn each store in its own task, keep the
//!    join handles
//! 4. **Graceful shutdown** - drop the clients (closing the channels), then
//!    await every store task
//! 5. **Observability setup** - [`setup_tracing`] initializes structured
//!    logging for the whole process
//!
//! ## Graceful Shutdown
//!
//! 1. Dropping the clients closes the sender side of every channel
//! 2. Each store's `recv()` returns `None` and its loop exits
//! 3. The stores log their final record counts
//! 4. `shutdown()` awaits the tasks and reports any panic
//!
//! The dependency graph is acyclic (fights depend on heroes and villains,
//! nothing depends on fights), so channel closure alone is a deterministic
//! shutdown signal: the clones held by the fight client die with it.
//!
//! ## Observability
//!
//! Log levels are selected via `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events and writes
//! RUST_LOG=debug cargo run     # every request with payloads
//! ```

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
