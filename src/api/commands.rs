use serde::{Deserialize, Serialize};

use crate::engine::{self, GameConfig, GameState, PlayerMove, RuleViolation};
use crate::infra::{DeterministicRng, SystemRng};

/// Команда верхнего уровня — всё, что меняет состояние партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Начать новую партию. Seed задаётся для воспроизводимых раздач.
    NewGame { seed: Option<u64> },

    /// Ход игрока (атака, отбой, взятие, завершение хода).
    Submit(PlayerMove),
}

/// Новая партия с конфигурацией по умолчанию.
/// С seed раздача полностью воспроизводима.
pub fn new_game(seed: Option<u64>) -> GameState {
    new_game_with_config(GameConfig::default(), seed)
}

/// Новая партия с явной конфигурацией.
pub fn new_game_with_config(config: GameConfig, seed: Option<u64>) -> GameState {
    match seed {
        Some(s) => engine::deal_new_game(config, &mut DeterministicRng::from_seed(s)),
        None => engine::deal_new_game(config, &mut SystemRng),
    }
}

/// Выполнить команду над состоянием. `NewGame` игнорирует старое
/// состояние и возвращает свежую партию.
pub fn apply_command(state: &GameState, command: &Command) -> Result<GameState, RuleViolation> {
    match command {
        Command::NewGame { seed } => Ok(new_game(*seed)),
        Command::Submit(mv) => engine::apply_move(state, mv),
    }
}
