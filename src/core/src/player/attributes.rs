use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// The six skill dimensions tracked for every player, FIFA-card style.
/// Raw values are conventionally 0-99.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    Pac,
    Sho,
    Pas,
    Dri,
    Def,
    Phy,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 6] = [
        AttributeKey::Pac,
        AttributeKey::Sho,
        AttributeKey::Pas,
        AttributeKey::Dri,
        AttributeKey::Def,
        AttributeKey::Phy,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AttributeKey::Pac => "PAC",
            AttributeKey::Sho => "SHO",
            AttributeKey::Pas => "PAS",
            AttributeKey::Dri => "DRI",
            AttributeKey::Def => "DEF",
            AttributeKey::Phy => "PHY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeKey::Pac => "Pace",
            AttributeKey::Sho => "Shooting",
            AttributeKey::Pas => "Passing",
            AttributeKey::Dri => "Dribbling",
            AttributeKey::Def => "Defense",
            AttributeKey::Phy => "Physicality",
        }
    }

    pub fn from_code(code: &str) -> Option<AttributeKey> {
        match code {
            "PAC" => Some(AttributeKey::Pac),
            "SHO" => Some(AttributeKey::Sho),
            "PAS" => Some(AttributeKey::Pas),
            "DRI" => Some(AttributeKey::Dri),
            "DEF" => Some(AttributeKey::Def),
            "PHY" => Some(AttributeKey::Phy),
            _ => None,
        }
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

/// A player's attribute card: one optional raw value per key, in the order
/// the card lists them. Absent values are treated as 0 when scoring.
pub type AttributeValues = Vec<(AttributeKey, Option<f32>)>;
