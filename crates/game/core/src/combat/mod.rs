//! Combat resolution system.
//!
//! Pure geometry and arithmetic plus a resolver that mutates both combatants
//! for one tick.
//!
//! # Core Functions
//!
//! - `resolve_combat`: symmetric hit/block/trade resolution
//! - `body_hitbox` / `attack_hitbox`: AABBs derived from position and facing
//! - `hit_damage` / `blocked_damage`: damage formulas

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{blocked_damage, hit_damage};
pub use hit::{Hitbox, attack_hitbox, body_hitbox, check_hit};
pub use result::{CombatEvent, resolve_combat};
