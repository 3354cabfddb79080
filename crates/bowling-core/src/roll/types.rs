use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::rules::PINS_PER_FRAME;
use crate::error::{Error, Result};

/// A single roll as written on a score sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Roll {
    /// Pins knocked down (0-9 when well formed)
    Pins(u8),
    Strike,
    Spare,
}

impl Roll {
    pub const STRIKE_SYMBOL: char = 'X';
    pub const SPARE_SYMBOL: char = '/';
    pub const GUTTER_SYMBOL: char = '-';

    pub fn is_strike(&self) -> bool {
        matches!(self, Self::Strike)
    }

    pub fn is_spare(&self) -> bool {
        matches!(self, Self::Spare)
    }

    /// Pin count, if this roll is written as a number
    pub fn pins(&self) -> Option<u8> {
        match self {
            Self::Pins(n) => Some(*n),
            Self::Strike | Self::Spare => None,
        }
    }

    /// Points this roll contributes when counted on its own.
    ///
    /// A spare marker has no standalone pin count; it counts as a full rack,
    /// which is only reached on malformed sequences.
    pub fn value(&self) -> u32 {
        match self {
            Self::Pins(n) => u32::from(*n),
            Self::Strike | Self::Spare => PINS_PER_FRAME,
        }
    }

    /// Parse a single symbol character
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Self::Strike),
            '/' => Some(Self::Spare),
            '-' => Some(Self::Pins(0)),
            c => c.to_digit(10).map(|d| Self::Pins(d as u8)),
        }
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pins(n) => write!(f, "{}", n),
            Self::Strike => write!(f, "{}", Self::STRIKE_SYMBOL),
            Self::Spare => write!(f, "{}", Self::SPARE_SYMBOL),
        }
    }
}

impl FromStr for Roll {
    type Err = Error;

    /// Accepts a single symbol, or a decimal pin count (which may be out of range)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(roll) = Self::from_symbol(c) {
                return Ok(roll);
            }
        }
        s.parse::<u8>()
            .map(Self::Pins)
            .map_err(|_| Error::InvalidRoll(s.to_string()))
    }
}

impl TryFrom<String> for Roll {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Roll> for String {
    fn from(roll: Roll) -> Self {
        roll.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Roll::from_symbol('X'), Some(Roll::Strike));
        assert_eq!(Roll::from_symbol('x'), Some(Roll::Strike));
        assert_eq!(Roll::from_symbol('/'), Some(Roll::Spare));
        assert_eq!(Roll::from_symbol('-'), Some(Roll::Pins(0)));
        assert_eq!(Roll::from_symbol('7'), Some(Roll::Pins(7)));
        assert_eq!(Roll::from_symbol('?'), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("X".parse::<Roll>().unwrap(), Roll::Strike);
        assert_eq!(" 4 ".parse::<Roll>().unwrap(), Roll::Pins(4));
        // Out-of-range counts parse; strict validation rejects them later
        assert_eq!("10".parse::<Roll>().unwrap(), Roll::Pins(10));
        assert!(matches!("XX".parse::<Roll>(), Err(Error::InvalidRoll(_))));
        assert!("".parse::<Roll>().is_err());
    }

    #[test]
    fn test_pins() {
        assert_eq!(Roll::Pins(7).pins(), Some(7));
        assert_eq!(Roll::Pins(0).pins(), Some(0));
        assert_eq!(Roll::Strike.pins(), None);
        assert_eq!(Roll::Spare.pins(), None);
    }

    #[test]
    fn test_value() {
        assert_eq!(Roll::Pins(6).value(), 6);
        assert_eq!(Roll::Strike.value(), 10);
        assert_eq!(Roll::Spare.value(), 10);
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&vec![Roll::Pins(3), Roll::Spare, Roll::Strike]).unwrap();
        assert_eq!(json, r#"["3","/","X"]"#);

        let rolls: Vec<Roll> = serde_json::from_str(r#"["x","-","9"]"#).unwrap();
        assert_eq!(rolls, vec![Roll::Strike, Roll::Pins(0), Roll::Pins(9)]);

        assert!(serde_json::from_str::<Roll>(r#""Q""#).is_err());
    }
}
