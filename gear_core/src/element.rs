//! Elemental types and their strong/weak relations
//!
//! The relation is a single directed cycle over four elements plus one
//! neutral element:
//!
//! - Fire > Mist > Sludge > Frost > Fire
//! - Physical is neither strong nor weak against anything
//!
//! Every "X strong against Y" has a matching "Y weak against X".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental type of a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Mist,
    Physical,
    Sludge,
    Frost,
}

impl Element {
    /// Get all elements, in declaration order
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Mist,
            Element::Physical,
            Element::Sludge,
            Element::Frost,
        ]
    }

    /// Elements this element deals bonus damage to
    pub fn strong_against(self) -> &'static [Element] {
        match self {
            Element::Fire => &[Element::Mist],
            Element::Mist => &[Element::Sludge],
            Element::Physical => &[],
            Element::Sludge => &[Element::Frost],
            Element::Frost => &[Element::Fire],
        }
    }

    /// Elements this element is vulnerable to
    pub fn weak_against(self) -> &'static [Element] {
        match self {
            Element::Fire => &[Element::Frost],
            Element::Mist => &[Element::Fire],
            Element::Physical => &[],
            Element::Sludge => &[Element::Mist],
            Element::Frost => &[Element::Sludge],
        }
    }

    /// Whether `other` is in this element's strong-against set
    pub fn is_strong_against(self, other: Element) -> bool {
        self.strong_against().contains(&other)
    }

    /// Whether `other` is in this element's weak-against set
    pub fn is_weak_against(self, other: Element) -> bool {
        self.weak_against().contains(&other)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Fire => write!(f, "Fire"),
            Element::Mist => write!(f, "Mist"),
            Element::Physical => write!(f, "Physical"),
            Element::Sludge => write!(f, "Sludge"),
            Element::Frost => write!(f, "Frost"),
        }
    }
}
