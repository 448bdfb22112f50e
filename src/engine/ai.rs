//! Эвристики автоматического противника.
//!
//! Жадная политика «минимальной достаточной карты»: и при отбое, и при
//! подкидывании автомат бережёт старшие карты. Более сильный противник —
//! drop-in замена этих трёх функций, state machine менять не нужно.

use crate::domain::card::{Card, Suit};
use crate::domain::table::Table;
use crate::engine::rules::{compare, sort_by_strength};
use crate::engine::RandomSource;

/// Выбор карты для отбоя. None — отбиться нечем, надо брать.
///
/// Два яруса: (1) младшая карта масти атаки, которая её бьёт;
/// (2) если таких нет и атака не козырная — младший козырь.
pub fn choose_defense(attacking: Card, hand: &[Card], trump_suit: Suit) -> Option<Card> {
    let mut same_suit: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.suit == attacking.suit && compare(*c, attacking, trump_suit) > 0)
        .collect();

    if !same_suit.is_empty() {
        sort_by_strength(&mut same_suit, trump_suit);
        return Some(same_suit[0]);
    }

    if attacking.suit != trump_suit {
        let mut trumps: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| c.suit == trump_suit)
            .collect();
        if !trumps.is_empty() {
            sort_by_strength(&mut trumps, trump_suit);
            return Some(trumps[0]);
        }
    }

    None
}

/// Кандидаты на подкидывание: карты руки, чей ранг уже есть на столе,
/// обрезанные по оставшейся вместимости стола.
///
/// Движок подкидывает консервативно — по одной карте за цикл решения,
/// переоценивая стол после каждого отбоя, поэтому применяется только
/// первый кандидат.
pub fn choose_throw_ins(hand: &[Card], table: &Table, max_slots: usize) -> Vec<Card> {
    if hand.is_empty() || table.is_empty() {
        return Vec::new();
    }

    let free = max_slots.saturating_sub(table.len());
    hand.iter()
        .copied()
        .filter(|c| table.contains_rank(c.rank))
        .take(free)
        .collect()
}

/// Открывающая атака: равновероятный выбор карты из руки.
///
/// Намеренно простая политика; замена на «ходить с младшей» не меняет
/// окружающий контракт. Рука не должна быть пустой — это гарантирует
/// вызывающий (state machine не спрашивает решение у игрока без карт).
pub fn choose_opening_attack<R: RandomSource>(hand: &[Card], rng: &mut R) -> Card {
    hand[rng.pick_index(hand.len())]
}
