use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    /// Все масти в порядке сборки колоды (как в оригинальной раздаче).
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Индекс масти 0..=3 в порядке `ALL`.
    pub fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

/// Ранг карты. В «Дураке» играет короткая колода: 6..туз.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Six = 6,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги от младшего к старшему.
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Индекс ранга 0..=8 (6 → 0, туз → 8).
    pub fn index(self) -> u8 {
        self as u8 - Rank::Six as u8
    }
}

/// Карта 36-карточной колоды. Идентичность карты — её `id`,
/// масть и ранг определяют только силу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self { id, rank, suit }
    }

    /// Канонический id карты — позиция в порядке сборки колоды (масть × ранг).
    pub fn canonical_id(rank: Rank, suit: Suit) -> CardId {
        suit.index() * 9 + rank.index()
    }

    /// Карта с каноническим id. Удобно для тестов и парсинга.
    pub fn canonical(rank: Rank, suit: Suit) -> Self {
        Self::new(Self::canonical_id(rank, suit), rank, suit)
    }

    pub fn is_trump(self, trump_suit: Suit) -> bool {
        self.suit == trump_suit
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from_digit(*r as u32, 10).unwrap(),
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c". Id получается канонический.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err("Card string must have length 2".into());
        }
        let mut chars = s.chars();
        let r_ch = chars.next().unwrap();
        let s_ch = chars.next().unwrap();

        let rank = match r_ch {
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch {
            'h' | 'H' => Suit::Hearts,
            'd' | 'D' => Suit::Diamonds,
            'c' | 'C' => Suit::Clubs,
            's' | 'S' => Suit::Spades,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::canonical(rank, suit))
    }
}
