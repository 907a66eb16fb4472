//! Numeric attributes of a combatant.

use serde::{Deserialize, Serialize};

/// Named numeric stats copied from the catalog at battle start.
///
/// `health` is the maximum health. Current health lives in the battle session,
/// so this snapshot never changes once a combatant is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    /// Maximum health.
    pub health: u32,
    /// Physical attack.
    pub attack: u32,
    /// Physical defense. Divides the attacker's attack in the damage formula.
    pub defense: u32,
    /// Special attack.
    pub special_attack: u32,
    /// Special defense.
    pub special_defense: u32,
    /// Speed.
    pub speed: u32,
}

/// Stat keys used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    /// `hp`
    Health,
    /// `attack`
    Attack,
    /// `defense`
    Defense,
    /// `special-attack`
    SpecialAttack,
    /// `special-defense`
    SpecialDefense,
    /// `speed`
    Speed,
}

impl StatKey {
    /// All stat keys, in catalog order.
    pub const ALL: [StatKey; 6] = [
        Self::Health,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// Key under which the catalog reports this stat.
    #[must_use]
    pub const fn catalog_name(self) -> &'static str {
        match self {
            Self::Health => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }
}

impl Attributes {
    /// Returns the value of a single stat.
    #[must_use]
    pub const fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Health => self.health,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::SpecialAttack => self.special_attack,
            StatKey::SpecialDefense => self.special_defense,
            StatKey::Speed => self.speed,
        }
    }

    /// Sets a single stat.
    pub fn set(&mut self, key: StatKey, value: u32) {
        match key {
            StatKey::Health => self.health = value,
            StatKey::Attack => self.attack = value,
            StatKey::Defense => self.defense = value,
            StatKey::SpecialAttack => self.special_attack = value,
            StatKey::SpecialDefense => self.special_defense = value,
            StatKey::Speed => self.speed = value,
        }
    }
}
