//! Тесты чистых правил сравнения и легальности (engine::rules).

use durak_engine::domain::{Card, Deck, Suit, Table};
use durak_engine::engine::rules::{
    can_attack_or_throw_in, can_beat, compare, rank_index, sort_by_strength, strength,
};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn rank_index_is_zero_to_eight() {
    assert_eq!(rank_index(c("6h").rank), 0);
    assert_eq!(rank_index(c("7h").rank), 1);
    assert_eq!(rank_index(c("Th").rank), 4);
    assert_eq!(rank_index(c("Jh").rank), 5);
    assert_eq!(rank_index(c("Ah").rank), 8);
}

#[test]
fn trump_bonus_dominates_any_rank() {
    let trump = Suit::Hearts;

    // Младший козырь сильнее старшего некозыря.
    assert!(strength(c("6h"), trump) > strength(c("As"), trump));
    // Внутри масти сила сводится к рангу.
    assert!(compare(c("Kh"), c("6h"), trump) > 0);
    assert!(compare(c("7s"), c("Ts"), trump) < 0);
}

#[test]
fn compare_is_antisymmetric_over_full_deck() {
    let trump = Suit::Clubs;
    let deck = Deck::durak_36();

    for &a in &deck.cards {
        for &b in &deck.cards {
            assert_eq!(
                compare(a, b, trump),
                -compare(b, a, trump),
                "антисимметрия нарушена для {a} / {b}"
            );
        }
    }
}

#[test]
fn compare_is_transitive_via_total_strength() {
    // Сила — целое число, поэтому порядок тотален и транзитивен;
    // убеждаемся, что сортировка по силе согласована со сравнением.
    let trump = Suit::Diamonds;
    let mut cards = Deck::durak_36().cards;
    sort_by_strength(&mut cards, trump);

    for pair in cards.windows(2) {
        assert!(compare(pair[0], pair[1], trump) <= 0);
    }

    // Все козыри после сортировки лежат в хвосте.
    assert!(cards[27..].iter().all(|c| c.suit == trump));
}

//
// can_beat: сценарии B/C/D из спецификации поведения.
//
#[test]
fn same_suit_higher_rank_beats() {
    // 9♠ бьёт 7♠ при козыре червы.
    assert!(can_beat(c("7s"), c("9s"), Suit::Hearts));
    // Та же масть, но младше — не бьёт.
    assert!(!can_beat(c("7s"), c("6s"), Suit::Hearts));
    // Карта не бьёт сама себя.
    assert!(!can_beat(c("7s"), c("7s"), Suit::Hearts));
}

#[test]
fn trump_beats_non_trump_regardless_of_rank() {
    // 6♥ (козырь) бьёт 7♠.
    assert!(can_beat(c("7s"), c("6h"), Suit::Hearts));
    // И даже туза.
    assert!(can_beat(c("As"), c("6h"), Suit::Hearts));
}

#[test]
fn offsuit_non_trump_never_beats() {
    // 8♦ против 7♠ при козыре червы: ранг выше, но масть чужая.
    assert!(!can_beat(c("7s"), c("8d"), Suit::Hearts));
    // Даже туз чужой некозырной масти.
    assert!(!can_beat(c("7s"), c("Ad"), Suit::Hearts));
}

#[test]
fn trump_vs_trump_reduces_to_rank() {
    assert!(can_beat(c("8h"), c("Th"), Suit::Hearts));
    assert!(!can_beat(c("Th"), c("8h"), Suit::Hearts));
    // Некозырь никогда не бьёт козырь.
    assert!(!can_beat(c("6h"), c("As"), Suit::Hearts));
}

#[test]
fn exhaustive_beat_relation_is_coherent() {
    let trump = Suit::Spades;
    let deck = Deck::durak_36();

    for &att in &deck.cards {
        for &def in &deck.cards {
            let expected = if def.suit == att.suit {
                def.rank > att.rank
            } else {
                def.suit == trump && att.suit != trump
            };
            assert_eq!(can_beat(att, def, trump), expected, "пара {att} / {def}");
        }
    }
}

//
// can_attack_or_throw_in
//
#[test]
fn empty_table_allows_any_opening_attack() {
    let table = Table::new();
    for card in &Deck::durak_36().cards {
        assert!(can_attack_or_throw_in(*card, &table));
    }
}

#[test]
fn throw_in_requires_rank_already_on_table() {
    let mut table = Table::new();
    table.add_attack(c("7s"));
    table.close_open(c("9h"));

    // Ранг атакующей карты.
    assert!(can_attack_or_throw_in(c("7d"), &table));
    // Ранг отбившей карты — тоже легально.
    assert!(can_attack_or_throw_in(c("9c"), &table));
    // Масть не играет роли, ранг мимо — нельзя.
    assert!(!can_attack_or_throw_in(c("8s"), &table));
    assert!(!can_attack_or_throw_in(c("As"), &table));
}
