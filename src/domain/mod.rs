//! Доменная модель «Дурака»: карты, колода, игроки, стол.
//!
//! Здесь только значения и их инварианты. Все правила игры и мутации
//! состояния живут в engine.

pub mod card;
pub mod deck;
pub mod player;
pub mod table;

/// Идентификатор игрока: 0 — человек, 1 — автоматический противник.
pub type PlayerId = u8;

/// Идентификатор карты: 0..=35, уникален в пределах колоды.
pub type CardId = u8;

/// Соперник игрока (в игре ровно два участника).
pub fn other_player(id: PlayerId) -> PlayerId {
    1 - id
}

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use player::*;
pub use table::*;
