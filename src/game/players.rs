use serde::{Deserialize, Serialize};

use crate::game::resources::{COST_CITY, COST_ROAD, COST_SETTLEMENT, ResourceBundle};
use crate::types::Color;

pub const MAX_SETTLEMENTS: u8 = 5;
pub const MAX_CITIES: u8 = 4;
pub const MAX_ROADS: u8 = 15;

/// Per-player bookkeeping: resource hand plus remaining-piece counters.
/// Occupancy lives on the board; setup placements and builds both draw from
/// the same counters, and a city upgrade returns the freed settlement piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub color: Color,
    pub resources: ResourceBundle,
    pub settlements_left: u8,
    pub cities_left: u8,
    pub roads_left: u8,
}

impl PlayerState {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            resources: ResourceBundle::zero(),
            settlements_left: MAX_SETTLEMENTS,
            cities_left: MAX_CITIES,
            roads_left: MAX_ROADS,
        }
    }

    pub fn total_cards(&self) -> u32 {
        self.resources.total()
    }

    pub fn can_build_road(&self) -> bool {
        self.roads_left > 0 && self.resources.can_afford(&COST_ROAD)
    }

    pub fn can_build_settlement(&self) -> bool {
        self.settlements_left > 0 && self.resources.can_afford(&COST_SETTLEMENT)
    }

    pub fn can_build_city(&self) -> bool {
        self.cities_left > 0 && self.resources.can_afford(&COST_CITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Resource;

    #[test]
    fn test_new_player_counters() {
        let player = PlayerState::new(Color::Red);
        assert_eq!(player.settlements_left, 5);
        assert_eq!(player.cities_left, 4);
        assert_eq!(player.roads_left, 15);
        assert_eq!(player.total_cards(), 0);
    }

    #[test]
    fn test_affordability_gates() {
        let mut player = PlayerState::new(Color::Red);
        assert!(!player.can_build_road());

        player.resources.add(Resource::Wood, 1);
        player.resources.add(Resource::Brick, 1);
        assert!(player.can_build_road());
        assert!(!player.can_build_settlement());

        player.resources.add(Resource::Sheep, 1);
        player.resources.add(Resource::Wheat, 1);
        assert!(player.can_build_settlement());

        player.resources.add(Resource::Wheat, 1);
        player.resources.add(Resource::Ore, 3);
        assert!(player.can_build_city());
        player.cities_left = 0;
        assert!(!player.can_build_city());
    }

    #[test]
    fn test_piece_counter_gates() {
        let mut player = PlayerState::new(Color::Red);
        player.resources.add(Resource::Wood, 1);
        player.resources.add(Resource::Brick, 1);
        player.roads_left = 0;
        assert!(!player.can_build_road());
    }
}
