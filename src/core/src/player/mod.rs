pub mod attributes;
pub mod position;
pub mod weighting;

pub use attributes::{AttributeKey, AttributeValues};
pub use position::PositionCode;
pub use weighting::{
    AttributeScore, PositionWeights, FALLBACK_WEIGHTS, POSITION_WEIGHTS, overall_rating,
    weight_attributes, weights_for_position,
};
