use serde::{Deserialize, Serialize};

use crate::board::{EdgeId, NodeId};
use crate::game::resources::{COST_CITY, COST_ROAD, COST_SETTLEMENT, ResourceBundle};

/// One legal build a player could take this turn: a tagged target descriptor,
/// selected by index and dispatched by a single match in the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildAction {
    City(NodeId),
    Settlement(NodeId),
    Road(EdgeId),
}

impl BuildAction {
    pub fn cost(&self) -> &'static ResourceBundle {
        match self {
            BuildAction::City(_) => &COST_CITY,
            BuildAction::Settlement(_) => &COST_SETTLEMENT,
            BuildAction::Road(_) => &COST_ROAD,
        }
    }
}
