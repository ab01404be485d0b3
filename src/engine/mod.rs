//! The game engine: entities, physics, spawning, collision, and the
//! session/phase machinery. Everything in here is terminal-free and
//! deterministic given an RNG, which is what makes the simulation
//! testable tick by tick.

pub mod collision;
pub mod config;
pub mod controller;
pub mod entity;
pub mod session;
pub mod spawn;

pub use config::{AdversaryBehavior, SessionConfig, SpawnTuning, TuningOverrides};
pub use controller::{Phase, SessionController};
pub use entity::{Adversary, Body, Collectible, Effect, Facing, Helper, Obstacle, Player, PlayerForm};
pub use session::{GameSession, TickReport};
pub use spawn::SpawnPolicy;
