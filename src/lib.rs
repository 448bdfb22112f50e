//! Движок двухпользовательского карточного «Дурака» (подкидной).
//!
//! Ядро — правила игры: модель карт, легальность атак и отбоев,
//! эвристики автоматического противника и state machine раунда.
//! Презентация (рендер, drag-and-drop, звук, паузы перед ходом
//! автомата) живёт снаружи: она подаёт ходы через `api`/`engine`
//! и читает проекции через `api::queries`.
//!
//! Движок синхронный и одно-поточный: ровно одна мутация состояния
//! за раз, решение автомата — чистый запрос `request_automated_move`,
//! который применяет вызывающий.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{apply_command, new_game, Command};
pub use domain::{Card, CardId, Deck, Player, PlayerId, Rank, Suit, Table, TableSlot};
pub use engine::{
    apply_move, request_automated_move, submit_attack, submit_defense, submit_end_attack_turn,
    submit_take, AutomatedAction, GameConfig, GameOutcome, GameState, MoveKind, Phase, PlayerMove,
    RuleViolation,
};
