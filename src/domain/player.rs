use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{CardId, PlayerId};

/// Игрок за столом: рука и флаг «человек или автомат».
///
/// Дубликатов в руке быть не может — id карт уникальны в колоде.
/// Размер руки добирается до 6 при пополнении, но может временно
/// превышать 6 после взятия карт со стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    pub is_human: bool,
}

impl Player {
    pub fn new(id: PlayerId, is_human: bool) -> Self {
        Self {
            id,
            hand: Vec::new(),
            is_human,
        }
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn has_card(&self, card_id: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card_id)
    }

    /// Найти карту в руке по id (копия — карты Copy).
    pub fn card(&self, card_id: CardId) -> Option<Card> {
        self.hand.iter().find(|c| c.id == card_id).copied()
    }

    /// Убрать карту из руки и вернуть её.
    pub fn take_card(&mut self, card_id: CardId) -> Option<Card> {
        let idx = self.hand.iter().position(|c| c.id == card_id)?;
        Some(self.hand.remove(idx))
    }
}
