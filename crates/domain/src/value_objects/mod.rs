//! Value objects - small immutable types validated on construction.

mod ability;
mod dice;
mod names;
mod quantity;

pub use ability::{Ability, AttributeBonuses, Attributes, Modifiers, DEFAULT_ATTRIBUTE_SCORE};
pub use dice::{
    die_faces, roll_ability_score, AbilityRoll, DiceFormula, DiceParseError, DiceRollResult,
    DieType,
};
pub use names::CharacterName;
pub use quantity::Quantity;
