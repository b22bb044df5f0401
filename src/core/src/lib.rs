pub mod player;
pub mod team;

// Player exports
pub use player::{
    AttributeKey, AttributeScore, AttributeValues, PositionCode, PositionWeights,
    FALLBACK_WEIGHTS, POSITION_WEIGHTS, overall_rating, weight_attributes, weights_for_position,
};

// Team exports
pub use team::{
    BalancedTeams, Formation, FormationSlot, FORMATIONS, RosterPlayer, TeamSheet, balance_teams,
    formation_names, formations_for_size, lookup_formation, supported_roster_sizes,
};
