use crate::domain::{CardId, PlayerId};

use thiserror::Error;

/// Ошибки правил: почему ход отклонён.
///
/// Все ошибки восстановимы для вызывающего — движок никогда не падает
/// на неверном вводе и не меняет состояние при отказе. Причина отказа
/// полностью определяется вариантом (презентация строит сообщение
/// только по нему).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Сейчас не ход игрока {0}")]
    NotYourTurn(PlayerId),

    #[error("Ход недопустим в текущей фазе")]
    WrongPhase,

    #[error("Карты {0} нет в руке")]
    CardNotInHand(CardId),

    #[error("Нет открытой пары, которую нужно отбивать")]
    NoOpenSlotToDefend,

    #[error("Подкинуть можно только карту ранга, уже лежащего на столе")]
    IllegalAttackRank,

    #[error("Эта карта не бьёт атакующую")]
    CannotBeat,

    #[error("На столе уже максимальное число пар")]
    SlotCapacityExceeded,

    #[error("Нечего брать или нечем завершать ход")]
    NothingToTakeOrEndWith,

    #[error("Игра уже завершена")]
    GameOver,
}
