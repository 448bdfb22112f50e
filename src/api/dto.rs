use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::PlayerId;
use crate::engine::{GameOutcome, Phase};

/// DTO игрока — то, что видно презентации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub is_human: bool,
    pub hand_size: usize,
    /// Сами карты — только для «героя»; чужая рука закрыта.
    pub hand: Option<Vec<Card>>,
}

/// DTO одной пары на столе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableSlotDto {
    pub attacking: Card,
    pub defending: Option<Card>,
}

/// Полная проекция партии для презентации: фаза, чей ход, атакующий,
/// козырь, стол, размеры рук, остаток стопки, итог.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameViewDto {
    pub phase: Phase,
    pub turn_player: PlayerId,
    pub attacker: PlayerId,
    pub trump_suit: Suit,
    pub trump_card: Card,
    /// Лежит ли козырная карта ещё в стопке (показывается под ней).
    pub trump_card_in_deck: bool,
    pub deck_remaining: usize,
    pub players: Vec<PlayerViewDto>,
    pub table: Vec<TableSlotDto>,
    pub is_over: bool,
    pub outcome: Option<GameOutcome>,
}
