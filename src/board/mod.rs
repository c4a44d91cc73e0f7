use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;

use crate::game::GameError;
use crate::types::{BuildingKind, Color, Resource};

pub mod layout;

pub use layout::{BoardLayout, EDGE_COUNT, NODE_COUNT, TILE_COUNT, TileSpec};

pub type NodeId = u16;
pub type TileId = u16;

/// Canonical unordered endpoint pair, always `min <= max`.
pub type EdgeId = (NodeId, NodeId);

pub fn normalize_edge(edge: EdgeId) -> EdgeId {
    if edge.0 <= edge.1 {
        edge
    } else {
        (edge.1, edge.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub kind: BuildingKind,
    pub owner: Color,
}

impl Building {
    pub fn victory_points(&self) -> u8 {
        match self.kind {
            BuildingKind::Settlement => 1,
            BuildingKind::City => 2,
        }
    }

    pub fn resource_multiplier(&self) -> u8 {
        match self.kind {
            BuildingKind::Settlement => 1,
            BuildingKind::City => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub owner: Color,
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub id: TileId,
    pub resource: Option<Resource>,
    pub number: Option<u8>,
    /// Corner nodes in cyclic order; consecutive pairs are the tile's edges.
    pub nodes: [NodeId; 6],
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub neighbors: SmallVec<[NodeId; 3]>,
    pub edges: SmallVec<[EdgeId; 3]>,
    pub tiles: SmallVec<[TileId; 3]>,
    pub building: Option<Building>,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub road: Option<Road>,
}

/// Arena of tiles, nodes, and edges addressed by stable indices.
///
/// Topology is fixed at construction; only the occupancy slots
/// (`Node::building`, `Edge::road`) change afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    edge_index: HashMap<EdgeId, usize>,
}

impl Board {
    pub fn standard() -> Self {
        Self::from_layout(layout::standard())
    }

    /// Builds the arena from a static layout. A malformed table (out-of-range
    /// node id, repeated node within a tile, wrong derived edge count) is a
    /// corrupt constant, not a runtime fault, and aborts construction.
    pub fn from_layout(layout: &BoardLayout) -> Self {
        assert_eq!(layout.tiles.len(), TILE_COUNT, "layout must have 19 tiles");

        let mut nodes: Vec<Node> = (0..NODE_COUNT as NodeId)
            .map(|id| Node {
                id,
                neighbors: SmallVec::new(),
                edges: SmallVec::new(),
                tiles: SmallVec::new(),
                building: None,
            })
            .collect();

        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for (idx, spec) in layout.tiles.iter().enumerate() {
            let id = idx as TileId;
            let distinct: HashSet<NodeId> = spec.nodes.iter().copied().collect();
            assert_eq!(distinct.len(), 6, "tile {id} repeats a corner node");
            for &node_id in &spec.nodes {
                let node = nodes
                    .get_mut(node_id as usize)
                    .unwrap_or_else(|| panic!("tile {id} references unknown node {node_id}"));
                node.tiles.push(id);
            }
            tiles.push(Tile {
                id,
                resource: spec.resource,
                number: spec.number,
                nodes: spec.nodes,
            });
        }

        // Derive edges from consecutive corner pairs, one per distinct
        // unordered pair. Insertion order follows the tile table.
        let mut edges: Vec<Edge> = Vec::with_capacity(EDGE_COUNT);
        let mut edge_index: HashMap<EdgeId, usize> = HashMap::with_capacity(EDGE_COUNT);
        for tile in &tiles {
            for i in 0..6 {
                let a = tile.nodes[i];
                let b = tile.nodes[(i + 1) % 6];
                let id = normalize_edge((a, b));
                if edge_index.contains_key(&id) {
                    continue;
                }
                edge_index.insert(id, edges.len());
                edges.push(Edge { id, road: None });
                nodes[a as usize].neighbors.push(b);
                nodes[b as usize].neighbors.push(a);
                nodes[a as usize].edges.push(id);
                nodes[b as usize].edges.push(id);
            }
        }
        assert_eq!(edges.len(), EDGE_COUNT, "layout derived wrong edge count");

        Self {
            tiles,
            nodes,
            edges,
            edge_index,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index
            .get(&normalize_edge(id))
            .map(|&idx| &self.edges[idx])
    }

    fn road_owner(&self, id: EdgeId) -> Option<Color> {
        self.edge(id).and_then(|edge| edge.road).map(|r| r.owner)
    }

    /// Non-desert tiles whose number token matches the rolled sum.
    pub fn tiles_producing(&self, number: u8) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(move |tile| tile.resource.is_some() && tile.number == Some(number))
    }

    fn distance_rule_ok(&self, node: &Node) -> bool {
        node.neighbors
            .iter()
            .all(|&n| self.nodes[n as usize].building.is_none())
    }

    fn has_own_road(&self, node: &Node, color: Color) -> bool {
        node.edges.iter().any(|&e| self.road_owner(e) == Some(color))
    }

    /// Nodes legal for a setup placement: unoccupied and distance rule only.
    pub fn setup_candidates(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.building.is_none() && self.distance_rule_ok(node))
            .map(|node| node.id)
            .collect()
    }

    /// Nodes legal for a mid-game settlement: unoccupied, distance rule, and
    /// reachable over one of the player's own roads.
    pub fn settlement_candidates(&self, color: Color) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| {
                node.building.is_none()
                    && self.distance_rule_ok(node)
                    && self.has_own_road(node, color)
            })
            .map(|node| node.id)
            .collect()
    }

    /// Unoccupied edges touching the player's network: an endpoint carries one
    /// of their buildings, or an endpoint touches one of their roads.
    pub fn road_candidates(&self, color: Color) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|edge| edge.road.is_none() && self.edge_connected_to(edge.id, color))
            .map(|edge| edge.id)
            .collect()
    }

    fn edge_connected_to(&self, edge: EdgeId, color: Color) -> bool {
        [edge.0, edge.1].into_iter().any(|node_id| {
            let node = &self.nodes[node_id as usize];
            node.building.map(|b| b.owner) == Some(color) || self.has_own_road(node, color)
        })
    }

    /// Settlements of `color` eligible for a city upgrade.
    pub fn upgrade_candidates(&self, color: Color) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| {
                node.building
                    == Some(Building {
                        kind: BuildingKind::Settlement,
                        owner: color,
                    })
            })
            .map(|node| node.id)
            .collect()
    }

    /// Unoccupied edges adjacent to `node`, in registration order.
    pub fn free_edges_at(&self, node: NodeId) -> Vec<EdgeId> {
        self.nodes[node as usize]
            .edges
            .iter()
            .copied()
            .filter(|&e| self.road_owner(e).is_none())
            .collect()
    }

    /// Length of the player's longest contiguous road.
    ///
    /// Roots a depth-first search at every owned edge and takes the maximum
    /// simple path. The visited set is path-local: each edge is un-marked on
    /// backtrack so it can appear in a different path explored from another
    /// root. The board graph has cycles, so this cannot be a plain reachable
    /// count.
    pub fn longest_road(&self, color: Color) -> u32 {
        let mut best = 0;
        for edge in &self.edges {
            if edge.road.map(|r| r.owner) == Some(color) {
                let mut visited = HashSet::new();
                best = best.max(self.road_length_from(edge.id, color, &mut visited));
            }
        }
        best
    }

    fn road_length_from(
        &self,
        edge: EdgeId,
        color: Color,
        visited: &mut HashSet<EdgeId>,
    ) -> u32 {
        visited.insert(edge);
        let mut best = 1;
        for node_id in [edge.0, edge.1] {
            let node = &self.nodes[node_id as usize];
            // An opposing building severs the road even though the node's
            // other edges are unclaimed territory.
            if node.building.is_some_and(|b| b.owner != color) {
                continue;
            }
            for &adjacent in &node.edges {
                if visited.contains(&adjacent) || self.road_owner(adjacent) != Some(color) {
                    continue;
                }
                best = best.max(1 + self.road_length_from(adjacent, color, visited));
            }
        }
        visited.remove(&edge);
        best
    }

    /// Building victory points for `color` (1 per settlement, 2 per city).
    /// The longest-road bonus is tracked by the turn engine, not here.
    pub fn victory_points(&self, color: Color) -> u8 {
        self.nodes
            .iter()
            .filter_map(|node| node.building)
            .filter(|building| building.owner == color)
            .map(|building| building.victory_points())
            .sum()
    }

    pub fn place_settlement(&mut self, node: NodeId, color: Color) -> Result<(), GameError> {
        let slot = &mut self.nodes[node as usize].building;
        if slot.is_some() {
            return Err(GameError::NodeOccupied(node));
        }
        *slot = Some(Building {
            kind: BuildingKind::Settlement,
            owner: color,
        });
        Ok(())
    }

    pub fn place_road(&mut self, edge: EdgeId, color: Color) -> Result<(), GameError> {
        let idx = *self
            .edge_index
            .get(&normalize_edge(edge))
            .ok_or(GameError::UnknownEdge(edge))?;
        let slot = &mut self.edges[idx].road;
        if slot.is_some() {
            return Err(GameError::EdgeOccupied(edge));
        }
        *slot = Some(Road { owner: color });
        Ok(())
    }

    /// Mutates the settlement's kind in place; owner and node are unchanged.
    pub fn upgrade_to_city(&mut self, node: NodeId) -> Result<(), GameError> {
        match &mut self.nodes[node as usize].building {
            Some(building) if building.kind == BuildingKind::Settlement => {
                building.kind = BuildingKind::City;
                Ok(())
            }
            _ => Err(GameError::NotASettlement(node)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_counts() {
        let board = Board::standard();
        assert_eq!(board.nodes().len(), 54);
        assert_eq!(board.tiles().len(), 19);
        assert_eq!(board.edges().len(), 72);
    }

    #[test]
    fn test_every_tile_has_six_nodes() {
        let board = Board::standard();
        for tile in board.tiles() {
            let distinct: HashSet<NodeId> = tile.nodes.iter().copied().collect();
            assert_eq!(distinct.len(), 6, "tile {}", tile.id);
        }
    }

    #[test]
    fn test_exactly_one_desert() {
        let board = Board::standard();
        let deserts: Vec<_> = board
            .tiles()
            .iter()
            .filter(|t| t.resource.is_none())
            .collect();
        assert_eq!(deserts.len(), 1);
        assert_eq!(deserts[0].number, None);
    }

    #[test]
    fn test_edges_register_mutual_neighbors() {
        let board = Board::standard();
        for edge in board.edges() {
            let (a, b) = edge.id;
            assert!(a < b, "edge id not canonical: {:?}", edge.id);
            assert!(board.node(a).neighbors.contains(&b));
            assert!(board.node(b).neighbors.contains(&a));
            assert!(board.node(a).edges.contains(&edge.id));
            assert!(board.node(b).edges.contains(&edge.id));
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let board = Board::standard();
        let distinct: HashSet<EdgeId> = board.edges().iter().map(|e| e.id).collect();
        assert_eq!(distinct.len(), board.edges().len());
    }

    #[test]
    fn test_adjacency_bounded_by_three() {
        let board = Board::standard();
        for node in board.nodes() {
            assert!(node.neighbors.len() <= 3, "node {}", node.id);
            assert!(node.edges.len() <= 3);
            assert!(node.tiles.len() <= 3);
            assert_eq!(node.neighbors.len(), node.edges.len());
        }
    }

    #[test]
    fn test_tiles_producing_skips_desert() {
        let board = Board::standard();
        assert_eq!(board.tiles_producing(7).count(), 0);
        let sixes: Vec<TileId> = board.tiles_producing(6).map(|t| t.id).collect();
        assert_eq!(sixes, vec![8, 10]);
        for number in 2..=12u8 {
            for tile in board.tiles_producing(number) {
                assert!(tile.resource.is_some());
            }
        }
    }

    #[test]
    fn test_distance_rule_excludes_neighbors() {
        let mut board = Board::standard();
        board.place_settlement(0, Color::Red).unwrap();
        let setup = board.setup_candidates();
        assert!(!setup.contains(&0));
        let neighbors = board.node(0).neighbors.clone();
        for &neighbor in &neighbors {
            assert!(!setup.contains(&neighbor), "node {neighbor}");
        }
        // two steps away is fine again
        assert!(setup.contains(&2));
    }

    #[test]
    fn test_settlement_candidates_require_own_road() {
        let mut board = Board::standard();
        board.place_road((0, 1), Color::Red).unwrap();
        let candidates = board.settlement_candidates(Color::Red);
        assert_eq!(candidates, vec![0, 1]);
        assert!(board.settlement_candidates(Color::Blue).is_empty());
    }

    #[test]
    fn test_settlement_candidates_respect_distance_rule() {
        let mut board = Board::standard();
        board.place_road((0, 1), Color::Red).unwrap();
        board.place_settlement(1, Color::Blue).unwrap();
        // node 0 neighbors the blue settlement now
        assert!(board.settlement_candidates(Color::Red).is_empty());
    }

    #[test]
    fn test_road_candidates_from_building_and_road() {
        let mut board = Board::standard();
        board.place_settlement(0, Color::Red).unwrap();
        let from_building = board.road_candidates(Color::Red);
        assert_eq!(from_building.len(), 3);
        for edge in &from_building {
            assert!(edge.0 == 0 || edge.1 == 0);
        }

        board.place_road((0, 1), Color::Red).unwrap();
        let extended = board.road_candidates(Color::Red);
        // the placed edge dropped out, node 1's other edges joined
        assert!(!extended.contains(&(0, 1)));
        assert!(extended.contains(&(1, 2)));
        assert!(board.road_candidates(Color::Blue).is_empty());
    }

    #[test]
    fn test_upgrade_candidates_only_own_settlements() {
        let mut board = Board::standard();
        board.place_settlement(0, Color::Red).unwrap();
        board.place_settlement(3, Color::Blue).unwrap();
        assert_eq!(board.upgrade_candidates(Color::Red), vec![0]);
        board.upgrade_to_city(0).unwrap();
        assert!(board.upgrade_candidates(Color::Red).is_empty());
    }

    #[test]
    fn test_occupancy_violations() {
        let mut board = Board::standard();
        board.place_settlement(0, Color::Red).unwrap();
        assert!(matches!(
            board.place_settlement(0, Color::Blue),
            Err(GameError::NodeOccupied(0))
        ));
        board.place_road((0, 1), Color::Red).unwrap();
        assert!(matches!(
            board.place_road((1, 0), Color::Blue),
            Err(GameError::EdgeOccupied(_))
        ));
        assert!(matches!(
            board.place_road((0, 2), Color::Red),
            Err(GameError::UnknownEdge(_))
        ));
        assert!(matches!(
            board.upgrade_to_city(4),
            Err(GameError::NotASettlement(4))
        ));
    }

    #[test]
    fn test_longest_road_zero_without_roads() {
        let board = Board::standard();
        assert_eq!(board.longest_road(Color::Red), 0);
    }

    #[test]
    fn test_longest_road_chain_with_branch() {
        let mut board = Board::standard();
        // five-edge chain 5-0-1-2-3-4 plus a one-edge branch at node 2
        for edge in [(5, 0), (0, 1), (1, 2), (2, 3), (3, 4)] {
            board.place_road(edge, Color::Red).unwrap();
        }
        board.place_road((2, 15), Color::Red).unwrap();
        assert_eq!(board.longest_road(Color::Red), 5);
        assert_eq!(board.longest_road(Color::Blue), 0);
    }

    #[test]
    fn test_longest_road_traverses_cycle_once() {
        let mut board = Board::standard();
        // the center tile's six edges form a cycle
        for edge in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)] {
            board.place_road(edge, Color::Red).unwrap();
        }
        assert_eq!(board.longest_road(Color::Red), 6);
    }

    #[test]
    fn test_opposing_building_severs_road() {
        let mut board = Board::standard();
        board.place_road((0, 1), Color::Red).unwrap();
        board.place_road((1, 2), Color::Red).unwrap();
        board.place_settlement(1, Color::Blue).unwrap();
        assert_eq!(board.longest_road(Color::Red), 1);
    }

    #[test]
    fn test_own_building_does_not_sever_road() {
        let mut board = Board::standard();
        board.place_road((0, 1), Color::Red).unwrap();
        board.place_road((1, 2), Color::Red).unwrap();
        board.place_settlement(1, Color::Red).unwrap();
        assert_eq!(board.longest_road(Color::Red), 2);
    }

    #[test]
    fn test_victory_points_scan() {
        let mut board = Board::standard();
        board.place_settlement(0, Color::Red).unwrap();
        board.place_settlement(2, Color::Red).unwrap();
        board.place_settlement(30, Color::Blue).unwrap();
        board.upgrade_to_city(2).unwrap();
        assert_eq!(board.victory_points(Color::Red), 3);
        assert_eq!(board.victory_points(Color::Blue), 1);
        assert_eq!(board.victory_points(Color::White), 0);
    }
}
