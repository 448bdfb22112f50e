use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
///
/// Верх стопки — хвост вектора (`draw_one` = pop), дно — индекс 0.
/// После раздачи дно колоды — открытая козырная карта, она уходит
/// из стопки последней.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Полная 36-карточная колода «Дурака» в порядке сборки:
    /// Hearts 6..A, Diamonds 6..A, Clubs 6..A, Spades 6..A.
    /// Id карт — последовательные 0..=35 (канонические).
    pub fn durak_36() -> Self {
        let mut cards = Vec::with_capacity(36);
        let mut id = 0;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(id, rank, suit));
                id += 1;
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху стопки.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять до n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Открытая козырная карта — дно стопки. None, когда стопка пуста
    /// (козырь уже ушёл в чью-то руку).
    pub fn trump_card(&self) -> Option<&Card> {
        self.cards.first()
    }
}
