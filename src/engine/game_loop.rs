use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::{other_player, CardId, PlayerId};
use crate::engine::actions::{AutomatedAction, MoveKind, PlayerMove};
use crate::engine::ai;
use crate::engine::errors::RuleViolation;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::rules;
use crate::engine::RandomSource;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Атакующий решает: положить карту или завершить раунд.
    Attack,
    /// Защитник решает: отбить открытую пару или забрать стол.
    Defense,
}

/// Итог партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    /// Оба вышли одновременно.
    Draw,
    /// Победитель — тот, кто первым остался без карт.
    Winner(PlayerId),
}

impl GameOutcome {
    /// «Дурак» — проигравший, оставшийся с картами.
    pub fn fool(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner(w) => Some(other_player(*w)),
            GameOutcome::Draw => None,
        }
    }
}

/// Права подкидывания — вариант домашних правил.
///
/// Флаг на будущее (вариант с >2 игроками): при двух игроках защитник
/// никогда не владеет фазой атаки, так что политики совпадают.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThrowInRights {
    /// Подкидывает только текущий атакующий (политика по умолчанию).
    AttackerOnly,
    /// Подкидывать может любой, кроме защитника.
    AnyPlayer,
}

impl ThrowInRights {
    pub fn allows(self, player_id: PlayerId, attacker: PlayerId) -> bool {
        match self {
            ThrowInRights::AttackerOnly => player_id == attacker,
            ThrowInRights::AnyPlayer => true,
        }
    }
}

/// Конфигурация партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// До скольких карт добирается рука при пополнении.
    pub hand_size: usize,
    /// Максимум пар на столе за раунд.
    pub max_table_slots: usize,
    pub throw_in_rights: ThrowInRights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 6,
            max_table_slots: Table::MAX_SLOTS,
            throw_in_rights: ThrowInRights::AttackerOnly,
        }
    }
}

/// Корневое состояние партии. Единственный владелец — state machine:
/// публичные переходы берут `&GameState` и возвращают новое значение,
/// отклонённый ход не меняет вообще ничего.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    /// Стопка добора; дно — открытая козырная карта.
    pub deck: Deck,
    /// Вскрытая при раздаче козырная карта (копия для показа:
    /// сама карта лежит на дне стопки, пока её не заберут добором).
    pub trump_card: Card,
    pub trump_suit: Suit,
    pub players: [Player; 2],
    pub table: Table,
    /// Чей сейчас ход.
    pub turn_player: PlayerId,
    pub phase: Phase,
    /// Кто атакует в этом раунде. Меняется только на границе раундов:
    /// после полного отбоя роль переходит защитнику, после взятия —
    /// остаётся у прежнего атакующего.
    pub attacker: PlayerId,
    pub outcome: Option<GameOutcome>,
    pub is_over: bool,
    pub history: GameHistory,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id as usize]
    }

    /// Защитник текущего раунда.
    pub fn defender(&self) -> PlayerId {
        other_player(self.attacker)
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Сколько карт ещё в игре: стопка + обе руки + стол.
    /// До первого завершённого раунда всегда 36, дальше монотонно убывает.
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.players[0].hand_size()
            + self.players[1].hand_size()
            + self.table.card_count()
    }
}

/// Новая партия: колода собирается, перемешивается, раздаётся 6/6,
/// козырь — последняя карта перемешанной колоды (дно стопки).
/// Первым атакует игрок 0 (человек).
pub fn deal_new_game<R: RandomSource>(config: GameConfig, rng: &mut R) -> GameState {
    let mut deck = Deck::durak_36();
    rng.shuffle(&mut deck.cards);

    // Дно стопки уйдёт добором последним — это и есть козырь.
    let trump_card = deck.cards[0];
    let trump_suit = trump_card.suit;

    let mut history = GameHistory::new();
    history.push(GameEventKind::GameStarted { trump_card });

    let mut players = [Player::new(0, true), Player::new(1, false)];
    for p in players.iter_mut() {
        let dealt = deck.draw_n(config.hand_size);
        history.push(GameEventKind::CardsDealt {
            player_id: p.id,
            count: dealt.len(),
        });
        p.hand = dealt;
    }

    GameState {
        config,
        deck,
        trump_card,
        trump_suit,
        players,
        table: Table::new(),
        turn_player: 0,
        phase: Phase::Attack,
        attacker: 0,
        outcome: None,
        is_over: false,
        history,
    }
}

/// Атака или подкидывание картой.
pub fn submit_attack(
    state: &GameState,
    player_id: PlayerId,
    card_id: CardId,
) -> Result<GameState, RuleViolation> {
    let mut next = state.clone();
    apply_attack(&mut next, player_id, card_id)?;
    Ok(next)
}

/// Отбой открытой пары картой.
pub fn submit_defense(
    state: &GameState,
    player_id: PlayerId,
    card_id: CardId,
) -> Result<GameState, RuleViolation> {
    let mut next = state.clone();
    apply_defense(&mut next, player_id, card_id)?;
    Ok(next)
}

/// Защитник забирает все карты со стола.
pub fn submit_take(state: &GameState, player_id: PlayerId) -> Result<GameState, RuleViolation> {
    let mut next = state.clone();
    apply_take(&mut next, player_id)?;
    Ok(next)
}

/// Атакующий отказывается подкидывать дальше — раунд завершается.
pub fn submit_end_attack_turn(
    state: &GameState,
    player_id: PlayerId,
) -> Result<GameState, RuleViolation> {
    let mut next = state.clone();
    apply_end_attack_turn(&mut next, player_id)?;
    Ok(next)
}

/// Применить произвольный ход (диспетчер для API-слоя).
pub fn apply_move(state: &GameState, mv: &PlayerMove) -> Result<GameState, RuleViolation> {
    match mv.kind {
        MoveKind::Attack(card_id) => submit_attack(state, mv.player_id, card_id),
        MoveKind::Defend(card_id) => submit_defense(state, mv.player_id, card_id),
        MoveKind::Take => submit_take(state, mv.player_id),
        MoveKind::EndAttackTurn => submit_end_attack_turn(state, mv.player_id),
    }
}

/// Что сделал бы сейчас автоматический игрок. Чистый запрос:
/// состояние не меняется, применяет решение вызывающий.
pub fn request_automated_move<R: RandomSource>(state: &GameState, rng: &mut R) -> AutomatedAction {
    if state.is_over {
        return AutomatedAction::NoMove;
    }

    let actor = state.player(state.turn_player);
    if actor.is_human {
        return AutomatedAction::NoMove;
    }

    match state.phase {
        Phase::Defense => match state.table.open_slot() {
            Some(slot) => {
                match ai::choose_defense(slot.attacking, &actor.hand, state.trump_suit) {
                    Some(card) => AutomatedAction::Defend { card_id: card.id },
                    None => AutomatedAction::Take,
                }
            }
            // Фаза защиты без открытой пары — нарушенный инвариант.
            None => AutomatedAction::NoMove,
        },

        Phase::Attack => {
            if state.table.is_empty() {
                if actor.hand.is_empty() {
                    return AutomatedAction::NoMove;
                }
                let card = ai::choose_opening_attack(&actor.hand, rng);
                AutomatedAction::Attack { card_id: card.id }
            } else {
                let candidates =
                    ai::choose_throw_ins(&actor.hand, &state.table, state.config.max_table_slots);
                // Подкидываем по одной карте за цикл решения.
                match candidates.first() {
                    Some(card) => AutomatedAction::Attack { card_id: card.id },
                    None => AutomatedAction::EndAttackTurn,
                }
            }
        }
    }
}

//
// Внутренние переходы. Порядок внутри каждого: сначала ВСЕ проверки,
// затем мутации — чтобы Err гарантированно означал «ничего не произошло».
//

fn ensure_running(state: &GameState) -> Result<(), RuleViolation> {
    if state.is_over {
        Err(RuleViolation::GameOver)
    } else {
        Ok(())
    }
}

fn apply_attack(
    state: &mut GameState,
    player_id: PlayerId,
    card_id: CardId,
) -> Result<(), RuleViolation> {
    ensure_running(state)?;

    if state.turn_player != player_id {
        return Err(RuleViolation::NotYourTurn(player_id));
    }
    if state.phase != Phase::Attack {
        return Err(RuleViolation::WrongPhase);
    }
    if !state
        .config
        .throw_in_rights
        .allows(player_id, state.attacker)
    {
        return Err(RuleViolation::NotYourTurn(player_id));
    }

    let card = state
        .player(player_id)
        .card(card_id)
        .ok_or(RuleViolation::CardNotInHand(card_id))?;

    if state.table.len() >= state.config.max_table_slots {
        return Err(RuleViolation::SlotCapacityExceeded);
    }
    if !rules::can_attack_or_throw_in(card, &state.table) {
        return Err(RuleViolation::IllegalAttackRank);
    }

    let card = state
        .player_mut(player_id)
        .take_card(card_id)
        .ok_or(RuleViolation::CardNotInHand(card_id))?;
    state.table.add_attack(card);
    state
        .history
        .push(GameEventKind::AttackPlayed { player_id, card });

    // Открылась пара — ход защитнику.
    state.phase = Phase::Defense;
    state.turn_player = state.defender();

    check_game_over(state);
    Ok(())
}

fn apply_defense(
    state: &mut GameState,
    player_id: PlayerId,
    card_id: CardId,
) -> Result<(), RuleViolation> {
    ensure_running(state)?;

    if state.turn_player != player_id {
        return Err(RuleViolation::NotYourTurn(player_id));
    }
    if state.phase != Phase::Defense {
        return Err(RuleViolation::WrongPhase);
    }

    let open = state
        .table
        .open_slot()
        .ok_or(RuleViolation::NoOpenSlotToDefend)?;
    let attacking = open.attacking;

    let card = state
        .player(player_id)
        .card(card_id)
        .ok_or(RuleViolation::CardNotInHand(card_id))?;

    if !rules::can_beat(attacking, card, state.trump_suit) {
        return Err(RuleViolation::CannotBeat);
    }

    let card = state
        .player_mut(player_id)
        .take_card(card_id)
        .ok_or(RuleViolation::CardNotInHand(card_id))?;
    state.table.close_open(card);
    state
        .history
        .push(GameEventKind::DefensePlayed { player_id, card });

    // Пара закрыта — атакующий решает, подкидывать ли дальше.
    state.phase = Phase::Attack;
    state.turn_player = state.attacker;

    check_game_over(state);
    Ok(())
}

fn apply_take(state: &mut GameState, player_id: PlayerId) -> Result<(), RuleViolation> {
    ensure_running(state)?;

    if state.turn_player != player_id {
        return Err(RuleViolation::NotYourTurn(player_id));
    }
    if state.phase != Phase::Defense {
        return Err(RuleViolation::WrongPhase);
    }
    if state.table.is_empty() {
        return Err(RuleViolation::NothingToTakeOrEndWith);
    }

    let cards = state.table.drain_all();
    state.history.push(GameEventKind::TableTaken {
        player_id,
        cards: cards.clone(),
    });
    state.player_mut(player_id).hand.extend(cards);

    replenish_hands(state);

    // Взявший пропускает атаку: роль атакующего НЕ вращается.
    state.phase = Phase::Attack;
    state.turn_player = state.attacker;

    check_game_over(state);
    Ok(())
}

fn apply_end_attack_turn(state: &mut GameState, player_id: PlayerId) -> Result<(), RuleViolation> {
    ensure_running(state)?;

    if state.turn_player != player_id {
        return Err(RuleViolation::NotYourTurn(player_id));
    }
    if state.phase != Phase::Attack {
        return Err(RuleViolation::WrongPhase);
    }
    if state.table.is_empty() || !state.table.all_defended() {
        return Err(RuleViolation::NothingToTakeOrEndWith);
    }

    // Полностью отбитый раунд: карты навсегда покидают игру.
    let discarded = state.table.drain_all();
    state
        .history
        .push(GameEventKind::RoundCompleted { discarded });

    replenish_hands(state);

    // Роль атакующего переходит бывшему защитнику.
    state.attacker = state.defender();
    state.turn_player = state.attacker;
    state.phase = Phase::Attack;
    state.history.push(GameEventKind::AttackerRotated {
        attacker: state.attacker,
    });

    check_game_over(state);
    Ok(())
}

/// Добор до полной руки: сначала атакующий, затем защитник.
/// Порядок важен, когда стопки не хватает на обоих.
fn replenish_hands(state: &mut GameState) {
    let order = [state.attacker, state.defender()];
    for pid in order {
        let need = state
            .config
            .hand_size
            .saturating_sub(state.player(pid).hand_size());
        if need == 0 {
            continue;
        }
        let drawn = state.deck.draw_n(need);
        if drawn.is_empty() {
            continue;
        }
        state.history.push(GameEventKind::CardsDrawn {
            player_id: pid,
            count: drawn.len(),
        });
        state.player_mut(pid).hand.extend(drawn);
    }
}

/// Проверка конца игры — после каждой мутации рук/стопки.
///
/// Игра окончена, когда стопка пуста и хотя бы одна рука пуста.
/// Обе руки пусты — ничья; иначе выигрывает вышедший первым.
fn check_game_over(state: &mut GameState) {
    if state.is_over || !state.deck.is_empty() {
        return;
    }

    let empty0 = state.players[0].hand.is_empty();
    let empty1 = state.players[1].hand.is_empty();

    let outcome = match (empty0, empty1) {
        (true, true) => GameOutcome::Draw,
        (true, false) => GameOutcome::Winner(0),
        (false, true) => GameOutcome::Winner(1),
        (false, false) => return,
    };

    state.is_over = true;
    state.outcome = Some(outcome);
    state.history.push(GameEventKind::GameFinished { outcome });
}
