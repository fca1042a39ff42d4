use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::{
    Bot, Card, CardKind, Color, GameBuilder, GameError, GreedyBot, HAND_SIZE, RandomBot, Turn,
    create_bot_from_spec, label_for_spec,
};

fn num(color: Color, n: u8) -> Card {
    Card::new(color, CardKind::Number(n))
}

/// Same layout as the helper in rules.rs: `rest` is drawn in slice order
/// after the starter, `hands[p][r]` is seat `p`'s card from deal round `r`.
fn build_deck(hands: &[Vec<Card>], starter: Card, rest: &[Card]) -> Vec<Card> {
    assert!(hands.iter().all(|hand| hand.len() == HAND_SIZE));
    let mut deck: Vec<Card> = rest.iter().rev().copied().collect();
    deck.push(starter);
    for round in (0..HAND_SIZE).rev() {
        for hand in hands.iter().rev() {
            deck.push(hand[round]);
        }
    }
    deck
}

fn hand_of(cards: &[Card]) -> Vec<Card> {
    assert_eq!(cards.len(), HAND_SIZE);
    cards.to_vec()
}

#[test]
fn greedy_plays_first_legal_index() -> Result<(), GameError> {
    let seat0 = hand_of(&[
        num(Color::Green, 7),
        num(Color::Red, 5),
        num(Color::Red, 2),
        num(Color::Green, 8),
        num(Color::Yellow, 8),
        num(Color::Yellow, 3),
        num(Color::Blue, 6),
    ]);
    let seat1 = vec![num(Color::Yellow, 8); HAND_SIZE];
    let deck = build_deck(&[seat0, seat1], num(Color::Red, 5), &[]);
    let game = GameBuilder::new(2)?.with_deck(deck).build()?;

    // Green 7 at index 0 is illegal on Red 5; Red 5 at index 1 is the first
    // legal card and must win over the equally legal Red 2 at index 2.
    let state = game.state_view(0)?;
    let turn = GreedyBot::new().select_turn(&state);
    assert_eq!(
        turn,
        Turn::Play {
            hand_index: 1,
            color: None,
        }
    );
    Ok(())
}

#[test]
fn greedy_draws_when_nothing_is_legal() -> Result<(), GameError> {
    let seat0 = hand_of(&[
        num(Color::Green, 7),
        num(Color::Green, 8),
        num(Color::Green, 9),
        num(Color::Blue, 7),
        num(Color::Blue, 8),
        num(Color::Yellow, 7),
        num(Color::Yellow, 8),
    ]);
    let seat1 = vec![num(Color::Yellow, 8); HAND_SIZE];
    let deck = build_deck(&[seat0, seat1], num(Color::Red, 5), &[]);
    let game = GameBuilder::new(2)?.with_deck(deck).build()?;

    let state = game.state_view(0)?;
    assert!(state.legal_plays().is_empty());
    assert_eq!(GreedyBot::new().select_turn(&state), Turn::Draw);
    Ok(())
}

#[test]
fn greedy_picks_dominant_hand_color_for_wild() -> Result<(), GameError> {
    let seat0 = hand_of(&[
        Card::new(Color::Wild, CardKind::Wild),
        num(Color::Blue, 1),
        num(Color::Blue, 2),
        num(Color::Blue, 3),
        num(Color::Green, 1),
        num(Color::Green, 2),
        num(Color::Yellow, 1),
    ]);
    let seat1 = vec![num(Color::Yellow, 8); HAND_SIZE];
    let deck = build_deck(&[seat0, seat1], num(Color::Red, 5), &[]);
    let game = GameBuilder::new(2)?.with_deck(deck).build()?;

    let state = game.state_view(0)?;
    assert_eq!(
        GreedyBot::new().select_turn(&state),
        Turn::Play {
            hand_index: 0,
            color: Some(Color::Blue),
        }
    );
    Ok(())
}

#[test]
fn random_bot_only_returns_legal_turns() -> Result<(), GameError> {
    let game = GameBuilder::new(3)?.with_seed(2024).build()?;
    let state = game.state_view(game.current_player_index())?;
    let legal = state.legal_plays();
    let mut bot = RandomBot::new(StdRng::seed_from_u64(17));

    for _ in 0..200 {
        match bot.select_turn(&state) {
            Turn::Play { hand_index, color } => {
                assert!(legal.contains(&hand_index));
                let card = state.hand[hand_index];
                assert_eq!(card.is_wild(), color.is_some());
                assert_ne!(color, Some(Color::Wild));
            }
            Turn::Draw => assert!(legal.is_empty()),
        }
    }
    Ok(())
}

#[test]
fn registry_resolves_known_specs() {
    assert!(create_bot_from_spec("greedy", 0, 1).is_ok());
    assert!(create_bot_from_spec("random:42", 1, 1).is_ok());
    assert!(create_bot_from_spec("human:Alice", 0, 1).is_ok());
    assert!(create_bot_from_spec("unknown", 0, 1).is_err());
    assert_eq!(label_for_spec("human:Alice"), "human");
    assert_eq!(label_for_spec("GREEDY"), "greedy");
}

#[test]
fn greedy_match_runs_to_completion() -> Result<(), GameError> {
    let num_players = 4;
    let mut game = GameBuilder::new(num_players)?.with_seed(31337).build()?;
    let mut bots: Vec<GreedyBot> = (0..num_players).map(|_| GreedyBot::new()).collect();

    let mut turns = 0usize;
    while !game.is_game_over() {
        assert!(turns < 20_000, "match did not terminate");
        let current = game.current_player_index();
        let state = game.state_view(current)?;
        let turn = bots[current].select_turn(&state);
        let accepted = game.apply_turn(turn)?;
        assert!(accepted, "greedy bot submitted an illegal play");
        turns += 1;
    }

    let winner = game.winner().expect("finished game has a winner");
    assert!(winner.has_won());
    assert!(game.players().iter().filter(|p| p.has_won()).count() == 1);
    Ok(())
}
