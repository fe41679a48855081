//! Shinobi Sheet domain
//!
//! Character model, stat derivation, XP progression, dice and the bundled
//! reference data. Pure code: no I/O, no clocks, no RNG of its own.

pub mod assignment;
pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod reference;
pub mod sheet;
pub mod stats;
pub mod value_objects;

pub use assignment::{StandardArrayAssignment, STANDARD_ARRAY};
pub use entities::{
    Character, CharacterDescription, Clan, ClassProficiencies, ConditionSet, EquipmentItem, Jutsu,
    NewCharacter, NinjaClass, Note, NORMAL_CONDITION, STARTING_LEVEL,
};
pub use error::DomainError;
pub use ids::{CharacterId, ClanId, ClassId, NoteId, ShareId};
pub use progression::{
    level_for_xp, proficiency_bonus, xp_for_next_level, xp_progress, XpProgress, XpTable,
    MAX_LEVEL,
};
pub use reference::ReferenceCatalog;
pub use sheet::CharacterSheet;
pub use stats::{
    character_stats, derived_combat_stats, effective_attribute, effective_attributes, modifier,
    modifiers, CharacterStats, CombatStats,
};
pub use value_objects::{
    roll_ability_score, Ability, AbilityRoll, AttributeBonuses, Attributes, CharacterName,
    DiceFormula, DiceParseError, DiceRollResult, DieType, Modifiers, Quantity,
    DEFAULT_ATTRIBUTE_SCORE,
};
