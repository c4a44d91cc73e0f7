use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::board::{EdgeId, NodeId};
use crate::types::{Color, Resource};

/// Structured record of one observable step of the simulation. The turn
/// engine emits these through an [`EventSink`]; rendering (or discarding)
/// them is the sink's business, which keeps the engine testable without
/// string matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SettlementPlaced { color: Color, node: NodeId },
    RoadPlaced { color: Color, edge: EdgeId },
    DiceRolled { sum: u8 },
    ResourcesGranted {
        color: Color,
        resource: Resource,
        amount: u8,
    },
    SettlementBuilt { color: Color, node: NodeId },
    CityBuilt { color: Color, node: NodeId },
    RoadBuilt { color: Color, edge: EdgeId },
    LongestRoadClaimed { color: Color, length: u32 },
    GameWon { color: Color, points: u8 },
}

pub trait EventSink {
    fn emit(&mut self, round: u32, event: &GameEvent);
}

/// Discards everything; for batch runs and tests that only care about the
/// final summary.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _round: u32, _event: &GameEvent) {}
}

/// Collects events for inspection in tests.
impl EventSink for Vec<(u32, GameEvent)> {
    fn emit(&mut self, round: u32, event: &GameEvent) {
        self.push((round, event.clone()));
    }
}

/// Renders the narrative transcript, one `round / actor: detail` line per
/// event. Output is advisory; write failures are ignored.
pub struct Transcript<W: Write> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for Transcript<W> {
    fn emit(&mut self, round: u32, event: &GameEvent) {
        use GameEvent::*;
        let _ = match event {
            SettlementPlaced { color, node } => {
                writeln!(self.out, "{round} / {color}: Placed settlement at node {node}")
            }
            RoadPlaced { color, edge } => writeln!(
                self.out,
                "{round} / {color}: Placed road between nodes {} and {}",
                edge.0, edge.1
            ),
            DiceRolled { sum } => writeln!(self.out, "{round} / Dice: {sum}"),
            ResourcesGranted {
                color,
                resource,
                amount,
            } => writeln!(self.out, "{round} / {color}: Received {amount} {resource}"),
            SettlementBuilt { color, node } => {
                writeln!(self.out, "{round} / {color}: Built settlement at node {node}")
            }
            CityBuilt { color, node } => {
                writeln!(self.out, "{round} / {color}: Built city at node {node}")
            }
            RoadBuilt { color, edge } => writeln!(
                self.out,
                "{round} / {color}: Built road between nodes {} and {}",
                edge.0, edge.1
            ),
            LongestRoadClaimed { color, length } => {
                writeln!(self.out, "{round} / {color}: Claimed longest road ({length})")
            }
            GameWon { color, points } => {
                writeln!(self.out, "{round} / {color}: Wins with {points} victory points!")
            }
        };
    }
}
