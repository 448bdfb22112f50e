use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;
use crate::engine::game_loop::GameOutcome;

/// Тип события партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия началась, козырь вскрыт.
    GameStarted { trump_card: Card },

    /// Игроку сданы карты при раздаче.
    CardsDealt { player_id: PlayerId, count: usize },

    /// Атака или подкидывание.
    AttackPlayed { player_id: PlayerId, card: Card },

    /// Отбой открытой пары.
    DefensePlayed { player_id: PlayerId, card: Card },

    /// Защитник забрал стол.
    TableTaken { player_id: PlayerId, cards: Vec<Card> },

    /// Раунд отбит полностью, карты ушли в сброс.
    RoundCompleted { discarded: Vec<Card> },

    /// Добор из стопки после раунда.
    CardsDrawn { player_id: PlayerId, count: usize },

    /// Роль атакующего перешла к бывшему защитнику.
    AttackerRotated { attacker: PlayerId },

    /// Партия завершена.
    GameFinished { outcome: GameOutcome },
}

/// Событие партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии — для реплея и отладки.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }
}
