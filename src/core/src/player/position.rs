use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Position codes as the app stores them on player documents (Spanish
/// short codes: delantero, mediocentro, defensa, portero).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PositionCode {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl PositionCode {
    pub const ALL: [PositionCode; 4] = [
        PositionCode::Forward,
        PositionCode::Midfielder,
        PositionCode::Defender,
        PositionCode::Goalkeeper,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PositionCode::Forward => "DEL",
            PositionCode::Midfielder => "MED",
            PositionCode::Defender => "DEF",
            PositionCode::Goalkeeper => "POR",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PositionCode::Forward => "Forward",
            PositionCode::Midfielder => "Midfielder",
            PositionCode::Defender => "Defender",
            PositionCode::Goalkeeper => "Goalkeeper",
        }
    }

    /// Position strings arrive from user-edited documents, so anything not
    /// matching a known code yields `None` rather than an error.
    pub fn from_code(code: &str) -> Option<PositionCode> {
        match code {
            "DEL" => Some(PositionCode::Forward),
            "MED" => Some(PositionCode::Midfielder),
            "DEF" => Some(PositionCode::Defender),
            "POR" => Some(PositionCode::Goalkeeper),
            _ => None,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionCode::Goalkeeper)
    }
}

impl Display for PositionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for position in PositionCode::ALL {
            assert_eq!(PositionCode::from_code(position.code()), Some(position));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(PositionCode::from_code(""), None);
        assert_eq!(PositionCode::from_code("GK"), None);
        assert_eq!(PositionCode::from_code("del"), None);
    }

    #[test]
    fn only_por_is_goalkeeper() {
        assert!(PositionCode::Goalkeeper.is_goalkeeper());
        assert!(!PositionCode::Forward.is_goalkeeper());
        assert!(!PositionCode::Midfielder.is_goalkeeper());
        assert!(!PositionCode::Defender.is_goalkeeper());
    }
}
