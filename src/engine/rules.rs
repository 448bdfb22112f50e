//! Чистые правила сравнения и легальности ходов.
//!
//! Ни одна функция здесь не трогает состояние — state machine только
//! консультируется с ними перед применением хода.

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::table::Table;

/// Бонус силы козыря: козырь безусловно старше любой некозырной карты.
pub const TRUMP_BONUS: i32 = 100;

/// Индекс ранга 0..=8 (6 → 0, туз → 8).
pub fn rank_index(rank: Rank) -> i32 {
    rank.index() as i32
}

/// Сила карты при данном козыре.
pub fn strength(card: Card, trump_suit: Suit) -> i32 {
    let bonus = if card.suit == trump_suit { TRUMP_BONUS } else { 0 };
    rank_index(card.rank) + bonus
}

/// Сравнение карт: > 0, если `a` сильнее `b`, < 0 — слабее, 0 — равны.
pub fn compare(a: Card, b: Card, trump_suit: Suit) -> i32 {
    strength(a, trump_suit) - strength(b, trump_suit)
}

/// Может ли `defending` побить `attacking`.
///
/// Бьёт либо старшая карта той же масти, либо козырь против некозыря.
/// Разномастные некозырные карты не бьют друг друга никогда, каким бы
/// старшим ни был ранг.
pub fn can_beat(attacking: Card, defending: Card, trump_suit: Suit) -> bool {
    if defending.suit == attacking.suit {
        return compare(defending, attacking, trump_suit) > 0;
    }
    defending.suit == trump_suit && attacking.suit != trump_suit
}

/// Можно ли атаковать или подкинуть эту карту при текущем столе.
///
/// Пустой стол — любая карта открывает атаку. Иначе ранг карты должен
/// совпадать с рангом любой карты на столе (атакующей или отбившей);
/// масть роли не играет. Лимит числа пар проверяет state machine.
pub fn can_attack_or_throw_in(card: Card, table: &Table) -> bool {
    table.is_empty() || table.contains_rank(card.rank)
}

/// Сортировка карт по силе, от слабых к сильным.
pub fn sort_by_strength(cards: &mut [Card], trump_suit: Suit) {
    cards.sort_by_key(|c| strength(*c, trump_suit));
}
