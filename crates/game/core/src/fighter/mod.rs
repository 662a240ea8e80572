//! Fighter profiles and equipment.
//!
//! A [`FighterProfile`] is immutable for the duration of a match. Weapons and
//! armour are folded into a new profile up front via [`FighterProfile::derive`]
//! rather than consulted every tick.
pub mod modifiers;
pub mod profile;

pub use modifiers::{Armour, Weapon};
pub use profile::{FighterProfile, ProfileError};
