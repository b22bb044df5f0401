use crate::player::attributes::AttributeKey;
use crate::player::position::PositionCode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tactical importance of each attribute for one position, each weight
/// in [0, 1]. Every key has a field, so a resolved table can never be
/// missing a weight.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionWeights {
    pub pace: f32,
    pub shooting: f32,
    pub passing: f32,
    pub dribbling: f32,
    pub defense: f32,
    pub physicality: f32,
}

impl PositionWeights {
    pub const fn uniform(weight: f32) -> Self {
        PositionWeights {
            pace: weight,
            shooting: weight,
            passing: weight,
            dribbling: weight,
            defense: weight,
            physicality: weight,
        }
    }

    pub fn get(&self, key: AttributeKey) -> f32 {
        match key {
            AttributeKey::Pac => self.pace,
            AttributeKey::Sho => self.shooting,
            AttributeKey::Pas => self.passing,
            AttributeKey::Dri => self.dribbling,
            AttributeKey::Def => self.defense,
            AttributeKey::Phy => self.physicality,
        }
    }
}

/// Used whenever the position code is unrecognized. Uniform weighting keeps
/// the ranking usable instead of failing on malformed position strings.
pub const FALLBACK_WEIGHTS: PositionWeights = PositionWeights::uniform(0.7);

pub const POSITION_WEIGHTS: &[(PositionCode, PositionWeights)] = &[
    (
        PositionCode::Forward,
        PositionWeights {
            pace: 0.9,
            shooting: 1.0,
            passing: 0.6,
            dribbling: 0.85,
            defense: 0.35,
            physicality: 0.5,
        },
    ),
    (
        PositionCode::Midfielder,
        PositionWeights {
            pace: 0.7,
            shooting: 0.65,
            passing: 1.0,
            dribbling: 0.9,
            defense: 0.55,
            physicality: 0.6,
        },
    ),
    (
        PositionCode::Defender,
        PositionWeights {
            pace: 0.7,
            shooting: 0.25,
            passing: 0.55,
            dribbling: 0.4,
            defense: 1.0,
            physicality: 0.9,
        },
    ),
    (
        PositionCode::Goalkeeper,
        PositionWeights {
            pace: 0.45,
            shooting: 0.2,
            passing: 0.5,
            dribbling: 0.3,
            defense: 0.9,
            physicality: 0.85,
        },
    ),
];

/// Resolve the weight table for a position code. Unknown codes degrade to
/// `FALLBACK_WEIGHTS` rather than erroring.
pub fn weights_for_position(position: &str) -> PositionWeights {
    let Some(code) = PositionCode::from_code(position) else {
        return FALLBACK_WEIGHTS;
    };

    POSITION_WEIGHTS
        .iter()
        .find(|(position, _)| *position == code)
        .map(|(_, weights)| *weights)
        .unwrap_or(FALLBACK_WEIGHTS)
}

/// One attribute of a player's card, scored against a position's weights.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AttributeScore {
    pub key: AttributeKey,
    pub raw: f32,
    pub weight: f32,
    pub score: f32,
}

/// Rank a player's attributes by tactical relevance to a position:
/// `score = raw * weight`, strongest first. Absent raw values count as 0.
/// The sort is stable, so equal scores keep the order of `values`.
pub fn weight_attributes(
    values: &[(AttributeKey, Option<f32>)],
    position: &str,
) -> Vec<AttributeScore> {
    let weights = weights_for_position(position);

    let mut scored: Vec<AttributeScore> = values
        .iter()
        .map(|&(key, raw)| {
            let raw = raw.unwrap_or(0.0);
            let weight = weights.get(key);

            AttributeScore {
                key,
                raw,
                weight,
                score: raw * weight,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    scored
}

/// Weighted mean of a player's attributes for a role, the OVR figure shown
/// on player cards. Only the attributes present on the card contribute.
pub fn overall_rating(values: &[(AttributeKey, Option<f32>)], position: &str) -> f32 {
    let scored = weight_attributes(values, position);

    let weight_sum: f32 = scored.iter().map(|entry| entry.weight).sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    scored.iter().map(|entry| entry.score).sum::<f32>() / weight_sum
}
