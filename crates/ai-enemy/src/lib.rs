//! Decision core for a patrolling melee enemy.
//!
//! - [`EnemyBrain`]: per-agent driver (timers, then one tree evaluation per tick)
//! - [`policy`]: the priority tree (stunned > attack > chase > patrol)
//! - [`combat`]: attack windup/cooldown and stun lockout as timer-driven state machines
//! - [`EnemyWorldView`] / [`EnemyWorldMut`]: what the host must provide

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod brain;
pub mod combat;
pub mod config;
pub mod error;
pub mod policy;
pub mod state;
pub mod world;

pub use brain::{tick_brains, EnemyBrain};
pub use config::EnemyConfig;
pub use error::{ConfigError, EnemyError, EnemyResult};
pub use policy::{build_tree, EnemyNode, EnemyTree};
pub use state::{AttackPhase, EnemyState, EnemyTimer, Facing, StateLabel};
pub use world::{distance_to_target, EnemyWorldMut, EnemyWorldView, FactionLayer};
