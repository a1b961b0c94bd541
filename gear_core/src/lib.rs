//! gear_core - Elemental types and equipment
//!
//! Leaf data for the battle engine: the five elements with their
//! strong/weak relation, and the armor, weapons, skills and pets a
//! fighter can carry.

pub mod element;
pub mod equipment;

pub use element::Element;
pub use equipment::{Armor, Identified, Pet, Skill, Weapon};
