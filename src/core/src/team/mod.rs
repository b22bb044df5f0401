pub mod balancer;
pub mod formation;

pub use balancer::{BalancedTeams, RosterPlayer, TeamSheet, balance_teams};
pub use formation::{
    Formation, FormationSlot, FORMATIONS, formation_names, formations_for_size, lookup_formation,
    supported_roster_sizes,
};
