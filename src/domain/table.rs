use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Одна пара на столе: атакующая карта и (возможно) побившая её.
///
/// Инвариант: `defending` выставляется не более одного раза за жизнь
/// пары. Пара без `defending` — «открытая».
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSlot {
    pub attacking: Card,
    pub defending: Option<Card>,
}

impl TableSlot {
    pub fn new(attacking: Card) -> Self {
        Self {
            attacking,
            defending: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.defending.is_none()
    }
}

/// Игровой стол: упорядоченные пары атака/защита текущего раунда.
///
/// Открытой может быть не более одной пары одновременно — новая атака
/// разрешается только когда все предыдущие пары закрыты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub slots: Vec<TableSlot>,
}

impl Table {
    /// Максимум пар за раунд (ограничен стандартным размером руки).
    pub const MAX_SLOTS: usize = 6;

    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Открытая (неотбитая) пара, если она есть.
    pub fn open_slot(&self) -> Option<&TableSlot> {
        self.slots.iter().find(|s| s.is_open())
    }

    /// Все ли пары закрыты. Для пустого стола — true.
    pub fn all_defended(&self) -> bool {
        self.slots.iter().all(|s| !s.is_open())
    }

    /// Есть ли на столе карта такого ранга — среди атакующих И отбивших
    /// (правило подкидывания учитывает и те и другие).
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.slots.iter().any(|s| {
            s.attacking.rank == rank || s.defending.map(|d| d.rank == rank).unwrap_or(false)
        })
    }

    /// Положить новую атакующую карту (открывает пару).
    pub fn add_attack(&mut self, card: Card) {
        self.slots.push(TableSlot::new(card));
    }

    /// Закрыть открытую пару защитной картой.
    /// Возвращает false, если открытой пары нет (state machine должен
    /// проверить это раньше).
    pub fn close_open(&mut self, card: Card) -> bool {
        match self.slots.iter_mut().find(|s| s.is_open()) {
            Some(slot) => {
                slot.defending = Some(card);
                true
            }
            None => false,
        }
    }

    /// Сколько карт лежит на столе (атакующие + отбившие).
    pub fn card_count(&self) -> usize {
        self.slots
            .iter()
            .map(|s| 1 + usize::from(s.defending.is_some()))
            .sum()
    }

    /// Забрать все карты со стола (взятие или сброс), стол очищается.
    pub fn drain_all(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        for slot in self.slots.drain(..) {
            cards.push(slot.attacking);
            if let Some(d) = slot.defending {
                cards.push(d);
            }
        }
        cards
    }
}
