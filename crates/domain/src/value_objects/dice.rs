//! Dice expressions and rolls
//!
//! Class hit and chakra dice are stored as expressions ("1d8", "d10");
//! stat derivation only reads the face count. Rolls take an RNG closure
//! `(min, max) -> value`, inclusive on both ends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    #[error("Empty dice formula")]
    Empty,
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    #[error("Unsupported die type: {0}")]
    UnsupportedDie(String),
}

/// `XdY+Z`: how many dice, how many faces, flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    pub dice_count: u8,
    pub die_size: u16,
    pub modifier: i32,
}

impl DiceFormula {
    pub fn new(dice_count: u8, die_size: u16, modifier: i32) -> Result<Self, DiceParseError> {
        match (dice_count, die_size) {
            (0, _) => Err(DiceParseError::InvalidDiceCount),
            (_, 0 | 1) => Err(DiceParseError::InvalidDieSize),
            _ => Ok(Self {
                dice_count,
                die_size,
                modifier,
            }),
        }
    }

    /// Accepts `XdY`, `dY` (one die), and either with `+Z` or `-Z`.
    /// Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(DiceParseError::Empty);
        }
        let invalid = || DiceParseError::InvalidFormat(normalized.clone());

        let (count, rest) = normalized.split_once('d').ok_or_else(invalid)?;
        let count: u8 = match count {
            "" => 1,
            digits => digits.parse().map_err(|_| invalid())?,
        };

        let (faces, modifier) = match rest.find(['+', '-']) {
            Some(0) => return Err(invalid()),
            Some(at) => {
                let modifier: i32 = rest[at..].parse().map_err(|_| invalid())?;
                (&rest[..at], modifier)
            }
            None => (rest, 0),
        };
        let faces: u16 = faces.parse().map_err(|_| invalid())?;

        Self::new(count, faces, modifier)
    }

    pub fn roll_with(&self, mut rng: impl FnMut(i32, i32) -> i32) -> DiceRollResult {
        let faces = i32::from(self.die_size);
        let individual_rolls: Vec<i32> = (0..self.dice_count).map(|_| rng(1, faces)).collect();
        let dice_total = individual_rolls.iter().sum::<i32>();

        DiceRollResult {
            formula: *self,
            individual_rolls,
            dice_total,
            total: dice_total.saturating_add(self.modifier),
        }
    }

    pub fn max_roll(&self) -> i32 {
        (i32::from(self.dice_count) * i32::from(self.die_size)).saturating_add(self.modifier)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        match self.modifier {
            0 => Ok(()),
            m => write!(f, "{m:+}"),
        }
    }
}

/// Face count of a die expression such as "d10" or "1d8".
pub fn die_faces(expression: &str) -> Result<i32, DiceParseError> {
    DiceFormula::parse(expression).map(|f| i32::from(f.die_size))
}

/// Outcome of rolling a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollResult {
    pub formula: DiceFormula,
    /// One entry per die, in roll order
    pub individual_rolls: Vec<i32>,
    /// Before the modifier
    pub dice_total: i32,
    pub total: i32,
}

impl DiceRollResult {
    /// e.g. `2d6[4, 5] + 3 = 12`
    pub fn breakdown(&self) -> String {
        let rolls = self
            .individual_rolls
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let modifier = match self.formula.modifier {
            0 => String::new(),
            m if m > 0 => format!(" + {m}"),
            m => format!(" - {}", -m),
        };
        format!(
            "{}d{}[{}]{} = {}",
            self.formula.dice_count, self.formula.die_size, rolls, modifier, self.total
        )
    }
}

/// The standard polyhedral dice accepted by the roll endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieType {
    pub fn faces(&self) -> u16 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D4 => "d4",
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D20 => "d20",
        }
    }
}

impl FromStr for DieType {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d4" => Ok(Self::D4),
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            "d20" => Ok(Self::D20),
            other => Err(DiceParseError::UnsupportedDie(other.to_string())),
        }
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute rolled with the "4d6, drop the lowest" method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRoll {
    /// All four dice, in the order rolled
    pub rolls: [i32; 4],
    /// The discarded (lowest) die
    pub dropped: i32,
    /// Sum of the three highest dice
    pub total: i32,
}

/// Roll four six-sided dice, discard the lowest and sum the remaining three.
pub fn roll_ability_score(mut rng: impl FnMut(i32, i32) -> i32) -> AbilityRoll {
    let rolls = [rng(1, 6), rng(1, 6), rng(1, 6), rng(1, 6)];
    let mut sorted = rolls;
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    AbilityRoll {
        rolls,
        dropped: sorted[3],
        total: sorted[..3].iter().sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(values: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut iter = values.into_iter();
        move |min, _max| iter.next().unwrap_or(min)
    }

    #[test]
    fn test_parse_shorthand_d10() {
        let formula = DiceFormula::parse("d10").unwrap();
        assert_eq!(formula.dice_count, 1);
        assert_eq!(formula.die_size, 10);
        assert_eq!(formula.modifier, 0);
    }

    #[test]
    fn test_parse_class_hit_die() {
        let formula = DiceFormula::parse("1d8").unwrap();
        assert_eq!(formula.dice_count, 1);
        assert_eq!(formula.die_size, 8);
    }

    #[test]
    fn test_parse_with_modifiers() {
        assert_eq!(DiceFormula::parse("2d6+3").unwrap().modifier, 3);
        assert_eq!(DiceFormula::parse("1D20-3").unwrap().modifier, -3);
        assert_eq!(DiceFormula::parse("  1d20+5  ").unwrap().die_size, 20);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(DiceFormula::parse(""), Err(DiceParseError::Empty)));
        assert!(matches!(
            DiceFormula::parse("20"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            DiceFormula::parse("0d20"),
            Err(DiceParseError::InvalidDiceCount)
        ));
        assert!(matches!(
            DiceFormula::parse("1d1"),
            Err(DiceParseError::InvalidDieSize)
        ));
    }

    #[test]
    fn test_die_faces() {
        assert_eq!(die_faces("d10").unwrap(), 10);
        assert_eq!(die_faces("1d12").unwrap(), 12);
        assert!(die_faces("ten").is_err());
    }

    #[test]
    fn test_roll_with_scripted_rng() {
        let formula = DiceFormula::parse("2d6+3").unwrap();
        let result = formula.roll_with(scripted(vec![4, 5]));
        assert_eq!(result.individual_rolls, vec![4, 5]);
        assert_eq!(result.total, 12);
        assert_eq!(result.breakdown(), "2d6[4, 5] + 3 = 12");
    }

    #[test]
    fn test_roll_requests_full_die_range() {
        let formula = DiceFormula::parse("1d20").unwrap();
        let result = formula.roll_with(|min, max| {
            assert_eq!((min, max), (1, 20));
            max
        });
        assert_eq!(result.total, formula.max_roll());
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceFormula::new(1, 20, 0).unwrap().to_string(), "1d20");
        assert_eq!(DiceFormula::new(1, 20, 5).unwrap().to_string(), "1d20+5");
        assert_eq!(DiceFormula::new(1, 20, -3).unwrap().to_string(), "1d20-3");
    }

    #[test]
    fn test_die_type_parse() {
        assert_eq!("d6".parse::<DieType>().unwrap().faces(), 6);
        assert!(matches!(
            "d7".parse::<DieType>(),
            Err(DiceParseError::UnsupportedDie(_))
        ));
    }

    #[test]
    fn test_ability_roll_drops_lowest() {
        let roll = roll_ability_score(scripted(vec![3, 6, 1, 5]));
        assert_eq!(roll.rolls, [3, 6, 1, 5]);
        assert_eq!(roll.dropped, 1);
        assert_eq!(roll.total, 14);
    }

    #[test]
    fn test_ability_roll_with_ties_drops_one_die() {
        let roll = roll_ability_score(scripted(vec![2, 2, 2, 2]));
        assert_eq!(roll.dropped, 2);
        assert_eq!(roll.total, 6);
    }

    #[test]
    fn test_huge_modifier_saturates() {
        let formula = DiceFormula::parse("1d6+2147483647").unwrap();
        let result = formula.roll_with(scripted(vec![4]));
        assert_eq!(result.dice_total, 4);
        assert_eq!(result.total, i32::MAX);
        assert_eq!(formula.max_roll(), i32::MAX);
    }
}
