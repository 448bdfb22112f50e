// src/bin/durak_dev_cli.rs
//
// Dev-CLI движка: прогоняет несколько полных партий self-play через
// публичный API и печатает ход игры. Человеческую сторону ведёт та же
// жадная политика, что и автоматическую — это smoke-тест всей поверхности.

use durak_engine::api::{build_game_view, new_game};
use durak_engine::engine::ai;
use durak_engine::engine::{
    request_automated_move, submit_attack, submit_defense, submit_end_attack_turn, submit_take,
    AutomatedAction, GameOutcome, GameState, Phase,
};
use durak_engine::infra::DeterministicRng;

/// Предохранитель от зацикливания (партия двух жадных ботов
/// укладывается в сотни ходов с огромным запасом).
const MAX_STEPS: usize = 5_000;

fn main() {
    println!("durak_dev_cli: self-play прогон движка…");

    for seed in [1u64, 7, 42] {
        println!();
        println!("================ ПАРТИЯ seed={seed} ================");
        play_game(seed);
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Одна полная партия на заданном seed.
fn play_game(seed: u64) {
    let mut state = new_game(Some(seed));
    let mut rng = DeterministicRng::from_seed(seed.wrapping_mul(0x9E37_79B9));

    println!(
        "[CLI] Козырь: {} | руки: {}/{} | стопка: {}",
        state.trump_card,
        state.players[0].hand_size(),
        state.players[1].hand_size(),
        state.deck_remaining()
    );

    let mut steps = 0;
    while !state.is_over {
        steps += 1;
        if steps > MAX_STEPS {
            println!("[CLI] ОШИБКА: партия не завершилась за {MAX_STEPS} ходов");
            return;
        }

        let actor = state.turn_player;
        let next = if state.player(actor).is_human {
            human_policy_step(&state, &mut rng)
        } else {
            automated_step(&state, &mut rng)
        };

        match next {
            Some(new_state) => state = new_state,
            None => {
                println!("[CLI] ОШИБКА: нет хода для игрока {actor}, стоп");
                return;
            }
        }
    }

    match state.outcome {
        Some(GameOutcome::Draw) => println!("[CLI] Ничья: оба вышли одновременно."),
        Some(GameOutcome::Winner(w)) => {
            let fool = state.outcome.and_then(|o| o.fool());
            println!("[CLI] Победил игрок {w}, в дураках — {fool:?}.");
        }
        None => println!("[CLI] Партия оборвалась без итога (не должно случаться)."),
    }

    let view = build_game_view(&state, None);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("[CLI] Финальная проекция:\n{json}"),
        Err(e) => println!("[CLI] Ошибка сериализации проекции: {e}"),
    }
    println!("[CLI] Ходов: {steps}, событий в истории: {}", state.history.events.len());
}

/// Ход автоматической стороны через штатный запрос.
fn automated_step(state: &GameState, rng: &mut DeterministicRng) -> Option<GameState> {
    let actor = state.turn_player;
    let action = request_automated_move(state, rng);

    let result = match action {
        AutomatedAction::Attack { card_id } => {
            println!("[AI]  игрок {actor} атакует картой id={card_id}");
            submit_attack(state, actor, card_id)
        }
        AutomatedAction::Defend { card_id } => {
            println!("[AI]  игрок {actor} отбивается картой id={card_id}");
            submit_defense(state, actor, card_id)
        }
        AutomatedAction::Take => {
            println!("[AI]  игрок {actor} берёт стол ({} карт)", state.table.card_count());
            submit_take(state, actor)
        }
        AutomatedAction::EndAttackTurn => {
            println!("[AI]  игрок {actor} завершает раунд");
            submit_end_attack_turn(state, actor)
        }
        AutomatedAction::NoMove => return None,
    };

    match result {
        Ok(next) => Some(next),
        Err(e) => {
            println!("[CLI] Отклонён ход автомата: {e}");
            None
        }
    }
}

/// «Человеческая» сторона в self-play: та же жадная политика поверх
/// публичных эвристик.
fn human_policy_step(state: &GameState, rng: &mut DeterministicRng) -> Option<GameState> {
    let actor = state.turn_player;
    let hand = &state.player(actor).hand;

    let result = match state.phase {
        Phase::Defense => {
            let slot = state.table.open_slot()?;
            match ai::choose_defense(slot.attacking, hand, state.trump_suit) {
                Some(card) => {
                    println!("[P0]  игрок {actor} отбивается {card}");
                    submit_defense(state, actor, card.id)
                }
                None => {
                    println!("[P0]  игрок {actor} берёт стол ({} карт)", state.table.card_count());
                    submit_take(state, actor)
                }
            }
        }
        Phase::Attack => {
            if state.table.is_empty() {
                if hand.is_empty() {
                    return None;
                }
                let card = ai::choose_opening_attack(hand, rng);
                println!("[P0]  игрок {actor} открывает атаку {card}");
                submit_attack(state, actor, card.id)
            } else {
                let candidates =
                    ai::choose_throw_ins(hand, &state.table, state.config.max_table_slots);
                match candidates.first() {
                    Some(card) => {
                        println!("[P0]  игрок {actor} подкидывает {card}");
                        submit_attack(state, actor, card.id)
                    }
                    None => {
                        println!("[P0]  игрок {actor} завершает раунд");
                        submit_end_attack_turn(state, actor)
                    }
                }
            }
        }
    };

    match result {
        Ok(next) => Some(next),
        Err(e) => {
            println!("[CLI] Отклонён ход игрока {actor}: {e}");
            None
        }
    }
}
