//! Движок «Дурака»: правила, эвристики противника, state machine раунда.
//!
//! Корневой объект: `GameState`.
//! Основные операции:
//!   - `deal_new_game` – раздать новую партию
//!   - `submit_attack` / `submit_defense` / `submit_take` /
//!     `submit_end_attack_turn` – ходы игроков
//!   - `request_automated_move` – решение автоматического противника

pub mod actions;
pub mod ai;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod rules;

pub use actions::{AutomatedAction, MoveKind, PlayerMove};
pub use errors::RuleViolation;
pub use game_loop::{
    apply_move, deal_new_game, request_automated_move, submit_attack, submit_defense,
    submit_end_attack_turn, submit_take, GameConfig, GameOutcome, GameState, Phase, ThrowInRights,
};
pub use history::{GameEvent, GameEventKind, GameHistory};

/// RNG интерфейс для engine. Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Беспристрастная перестановка (Фишер–Йетс внутри `rand`).
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равновероятный индекс 0..len. Требование: len > 0.
    fn pick_index(&mut self, len: usize) -> usize;
}
