use serde::{Deserialize, Serialize};

use crate::domain::{CardId, PlayerId};

/// Тип хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoveKind {
    /// Атака или подкидывание картой (открывает новую пару на столе).
    Attack(CardId),
    /// Отбой открытой пары картой.
    Defend(CardId),
    /// Защитник забирает все карты со стола.
    Take,
    /// Атакующий отказывается подкидывать — раунд завершается.
    EndAttackTurn,
}

/// Конкретный ход игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerMove {
    /// Какой игрок ходит.
    pub player_id: PlayerId,
    /// Сам ход.
    pub kind: MoveKind,
}

/// Решение автоматического игрока (`request_automated_move`).
///
/// Движок только отвечает, что противник сделал бы сейчас; применяет
/// ход вызывающий — когда сочтёт нужным (после паузы презентации).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AutomatedAction {
    Attack { card_id: CardId },
    Defend { card_id: CardId },
    Take,
    EndAttackTurn,
    /// Сейчас не ход автомата (или игра окончена) — делать нечего.
    NoMove,
}

impl AutomatedAction {
    /// Превратить решение в ход указанного игрока.
    pub fn into_move(self, player_id: PlayerId) -> Option<PlayerMove> {
        let kind = match self {
            AutomatedAction::Attack { card_id } => MoveKind::Attack(card_id),
            AutomatedAction::Defend { card_id } => MoveKind::Defend(card_id),
            AutomatedAction::Take => MoveKind::Take,
            AutomatedAction::EndAttackTurn => MoveKind::EndAttackTurn,
            AutomatedAction::NoMove => return None,
        };
        Some(PlayerMove { player_id, kind })
    }
}
