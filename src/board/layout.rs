//! Static geometry of the standard 19-tile board.
//!
//! The table below is the only hand-authored data in the crate: per tile a
//! resource (exactly one desert), a number token, and the six corner nodes in
//! cyclic order starting north and walking clockwise. Edges are derived from
//! consecutive node pairs, so the cyclic order is load-bearing. Tiles are
//! listed center-out (center, inner ring, outer ring) and node ids are
//! assigned in order of first appearance, which fixes iteration order for
//! everything built on top.

use once_cell::sync::Lazy;

use crate::board::NodeId;
use crate::types::Resource;

pub const NODE_COUNT: usize = 54;
pub const TILE_COUNT: usize = 19;
pub const EDGE_COUNT: usize = 72;

#[derive(Debug, Clone)]
pub struct TileSpec {
    pub resource: Option<Resource>,
    pub number: Option<u8>,
    pub nodes: [NodeId; 6],
}

#[derive(Debug, Clone)]
pub struct BoardLayout {
    pub tiles: Vec<TileSpec>,
}

pub fn standard() -> &'static BoardLayout {
    &STANDARD
}

static STANDARD: Lazy<BoardLayout> = Lazy::new(|| {
    use Resource::*;
    let tile = |resource, number, nodes| TileSpec {
        resource: Some(resource),
        number: Some(number),
        nodes,
    };
    BoardLayout {
        tiles: vec![
            // center
            tile(Wood, 10, [0, 1, 2, 3, 4, 5]),
            // inner ring
            tile(Wheat, 11, [6, 7, 0, 5, 8, 9]),
            tile(Brick, 8, [10, 11, 12, 1, 0, 7]),
            tile(Ore, 3, [12, 13, 14, 15, 2, 1]),
            tile(Sheep, 11, [2, 15, 16, 17, 18, 3]),
            tile(Sheep, 5, [4, 3, 18, 19, 20, 21]),
            tile(Sheep, 12, [8, 5, 4, 21, 22, 23]),
            // outer ring
            tile(Wheat, 3, [24, 25, 6, 9, 26, 27]),
            tile(Ore, 6, [28, 29, 10, 7, 6, 25]),
            tile(Wood, 4, [30, 31, 32, 11, 10, 29]),
            tile(Ore, 6, [32, 33, 34, 13, 12, 11]),
            tile(Wheat, 9, [34, 35, 36, 37, 14, 13]),
            tile(Wood, 5, [14, 37, 38, 39, 16, 15]),
            tile(Brick, 9, [16, 39, 40, 41, 42, 17]),
            tile(Brick, 8, [18, 17, 42, 43, 44, 19]),
            tile(Wheat, 4, [20, 19, 44, 45, 46, 47]),
            TileSpec {
                resource: None,
                number: None,
                nodes: [22, 21, 20, 47, 48, 49],
            },
            tile(Wood, 2, [50, 23, 22, 49, 51, 52]),
            tile(Sheep, 10, [26, 9, 8, 23, 50, 53]),
        ],
    }
});
