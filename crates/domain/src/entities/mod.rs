//! Domain entities

pub mod character;
mod clan;
mod condition;
mod ninja_class;

pub use character::{
    Character, CharacterDescription, EquipmentItem, Jutsu, NewCharacter, Note, NORMAL_CONDITION,
    STARTING_LEVEL,
};
pub use clan::Clan;
pub use condition::ConditionSet;
pub use ninja_class::{ClassProficiencies, NinjaClass};
