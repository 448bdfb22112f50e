use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;
use crate::engine::{GameHistory, GameState};

use super::dto::{GameViewDto, PlayerViewDto, TableSlotDto};

/// Запросы «только чтение».
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Проекция партии; `hero` — чья рука открывается.
    GetView { hero: Option<PlayerId> },

    /// Рука конкретного игрока (для отладки/админки).
    GetHand { player_id: PlayerId },

    /// История партии.
    GetHistory,
}

/// Результат запроса «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    View(GameViewDto),
    Hand(Vec<Card>),
    History(GameHistory),
}

/// Выполнить запрос к состоянию.
pub fn run_query(state: &GameState, query: Query) -> QueryResponse {
    match query {
        Query::GetView { hero } => QueryResponse::View(build_game_view(state, hero)),
        Query::GetHand { player_id } => {
            let hand = if usize::from(player_id) < state.players.len() {
                state.player(player_id).hand.clone()
            } else {
                Vec::new()
            };
            QueryResponse::Hand(hand)
        }
        Query::GetHistory => QueryResponse::History(state.history.clone()),
    }
}

/// Сформировать проекцию партии. Карты в руке показываются только
/// игроку `hero` (None — обе руки закрыты, Some — только его).
pub fn build_game_view(state: &GameState, hero: Option<PlayerId>) -> GameViewDto {
    let players = state
        .players
        .iter()
        .map(|p| PlayerViewDto {
            player_id: p.id,
            is_human: p.is_human,
            hand_size: p.hand_size(),
            hand: if hero == Some(p.id) {
                Some(p.hand.clone())
            } else {
                None
            },
        })
        .collect();

    let table = state
        .table
        .slots
        .iter()
        .map(|s| TableSlotDto {
            attacking: s.attacking,
            defending: s.defending,
        })
        .collect();

    GameViewDto {
        phase: state.phase,
        turn_player: state.turn_player,
        attacker: state.attacker,
        trump_suit: state.trump_suit,
        trump_card: state.trump_card,
        trump_card_in_deck: state.deck.trump_card().is_some(),
        deck_remaining: state.deck_remaining(),
        players,
        table,
        is_over: state.is_over,
        outcome: state.outcome,
    }
}
