// src/snapshot.rs
//! JS 側に渡す盤面のスナップショット。serde で JSON にするだけの入れ物だよ。

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::controller::GameController;
use crate::zones::{Zone, ZoneId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// "AS" や "10H"。
    pub name: String,
    pub face_up: bool,
    pub x: f32,
    pub y: f32,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            name: card.to_string(),
            face_up: card.is_face_up,
            x: card.position.x,
            y: card.position.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub id: ZoneId,
    pub position: Position,
    pub cards: Vec<CardSnapshot>,
}

impl From<&Zone> for ZoneSnapshot {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.id(),
            position: zone.position(),
            cards: zone.cards().iter().map(CardSnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSnapshot {
    pub source: ZoneId,
    pub target: ZoneId,
    pub cards: Vec<CardSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub deck: ZoneSnapshot,
    pub discard: ZoneSnapshot,
    pub foundations: Vec<ZoneSnapshot>,
    pub tableaus: Vec<ZoneSnapshot>,
    pub selection: ZoneSnapshot,
    pub animations: Vec<AnimationSnapshot>,
    pub score: u32,
    pub game_over: bool,
    pub auto_winning: bool,
}

impl BoardSnapshot {
    pub fn capture(controller: &GameController) -> Self {
        let board = controller.board();
        Self {
            deck: board.deck().into(),
            discard: board.discard().into(),
            foundations: board.foundations().iter().map(ZoneSnapshot::from).collect(),
            tableaus: board.tableaus().iter().map(ZoneSnapshot::from).collect(),
            selection: board.selection().into(),
            animations: controller
                .animations()
                .iter()
                .map(|a| AnimationSnapshot {
                    source: a.source(),
                    target: a.target(),
                    cards: a.cards().iter().map(CardSnapshot::from).collect(),
                })
                .collect(),
            score: controller.score(),
            game_over: controller.game_over(),
            auto_winning: controller.is_auto_winning(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game_config::GameConfig;

    #[test]
    fn snapshot_of_a_fresh_deal() {
        let controller = GameController::with_seed(GameConfig::default(), 3);
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.deck.cards.len(), 24);
        assert_eq!(snapshot.tableaus.len(), 7);
        assert_eq!(snapshot.tableaus[6].cards.len(), 7);
        assert!(snapshot.tableaus[6].cards[6].face_up);
        assert_eq!(snapshot.score, 0);

        let json = snapshot.to_json().expect("snapshot serializes");
        assert!(json.contains("\"Tableau\":6"), "json: {}", json);
        let back: BoardSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(back, snapshot);
    }
}
