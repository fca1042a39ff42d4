use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Card, CardKind, Color};
use crate::deck::Deck;
use crate::error::GameError;
use crate::player::Player;
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState};
use crate::turn::{PlayerId, Turn};

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self { num_players, seed })
    }
}

/// Builder that enables deterministic deck injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Inject a fixed draw order instead of a shuffled full deck. Cards are
    /// drawn from the end of `deck`.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core UNO rules engine: turn order, active color and card-effect
/// resolution over one deck and N seats. Seat 0 is the human-facing seat;
/// the remaining seats are computer-controlled.
///
/// The engine is synchronous and single-threaded; any pacing of automated
/// turns belongs to the caller.
pub struct Game {
    settings: GameSettings,
    deck: Deck,
    players: Vec<Player>,
    current_player_index: PlayerId,
    clockwise: bool,
    current_color: Color,
    rng: StdRng,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.num_players)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut deck = match deck {
            Some(cards) => {
                if cards.len() < settings.num_players * settings.hand_size + 1 {
                    return Err(GameError::InvalidConfiguration(
                        "deck does not contain enough cards to deal hands",
                    ));
                }
                Deck::from_cards(cards)
            }
            None => Deck::new(&mut rng),
        };

        let mut players = Vec::with_capacity(settings.num_players);
        players.push(Player::new("You", false));
        for i in 1..settings.num_players {
            players.push(Player::new(format!("Computer {i}"), true));
        }

        // Round-robin deal: one card to every seat per round.
        for _ in 0..settings.hand_size {
            for player in &mut players {
                player.add_card(deck.draw(&mut rng));
            }
        }

        // The starter must have a concrete color. Wild starters are buried
        // in the discard pile and the draw pile is reshuffled before the
        // next attempt.
        let mut starter = deck.draw(&mut rng);
        while starter.is_wild() {
            deck.discard(starter);
            deck.shuffle(&mut rng);
            starter = deck.draw(&mut rng);
        }
        let current_color = starter.color;
        deck.discard(starter);

        Ok(Self {
            settings,
            deck,
            players,
            current_player_index: 0,
            clockwise: true,
            current_color,
            rng,
        })
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_index(&self) -> PlayerId {
        self.current_player_index
    }

    /// Top card of the discard pile. Construction always leaves a starter
    /// there, so this never fails on a constructed game.
    pub fn top_card(&self) -> Card {
        self.deck
            .top_discard()
            .copied()
            .expect("discard pile holds the starter after setup")
    }

    /// The color plays must currently match. Never `Color::Wild`.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn draw_pile_len(&self) -> usize {
        self.deck.draw_pile_len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.deck.discard_pile_len()
    }

    pub fn status(&self) -> GameStatus {
        match self.players.iter().position(Player::has_won) {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::Ongoing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(Player::has_won)
    }

    /// First seat (in seat order) with an empty hand. Hands empty one play
    /// at a time, so at most one seat can match.
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|player| player.has_won())
    }

    /// Attempt to play the current player's card at `hand_index`.
    ///
    /// Legality is the physical match on the top card or a match on the
    /// active color. An illegal card returns `Ok(false)` with no state
    /// change; an out-of-range index is an error. On success the card moves
    /// to the discard pile, its effect resolves, and the turn advances.
    pub fn play_card(&mut self, hand_index: usize) -> Result<bool, GameError> {
        let player = &self.players[self.current_player_index];
        let card = *player
            .hand()
            .get(hand_index)
            .ok_or(GameError::HandIndex(hand_index))?;
        let top = self.top_card();
        if !card.can_play_on(&top) && card.color != self.current_color {
            return Ok(false);
        }
        let card = self.players[self.current_player_index].play_card(hand_index)?;
        self.deck.discard(card);
        self.resolve_effect(card);
        Ok(true)
    }

    /// Apply the played card's effect and advance the turn. Wild cards leave
    /// the active color untouched; the caller supplies it afterwards via
    /// `set_current_color`.
    fn resolve_effect(&mut self, card: Card) {
        match card.kind {
            CardKind::Number(_) => {
                self.current_color = card.color;
                self.next_player();
            }
            CardKind::Skip => {
                self.current_color = card.color;
                // Advance twice: skips exactly one seat.
                self.next_player();
                self.next_player();
            }
            CardKind::Reverse => {
                self.current_color = card.color;
                self.clockwise = !self.clockwise;
                if self.players.len() == 2 {
                    // With two seats a reverse behaves like a skip.
                    self.next_player();
                }
                self.next_player();
            }
            CardKind::DrawTwo => {
                self.current_color = card.color;
                self.next_player();
                self.deal_to_current(2);
                self.next_player();
            }
            CardKind::Wild => {
                self.next_player();
            }
            CardKind::WildDrawFour => {
                self.next_player();
                self.deal_to_current(4);
                self.next_player();
            }
        }
    }

    fn deal_to_current(&mut self, count: usize) {
        for _ in 0..count {
            let card = self.deck.draw(&mut self.rng);
            self.players[self.current_player_index].add_card(card);
        }
    }

    /// Draw one card for the current player and pass the turn ("draw ends
    /// your turn"). Callers wanting a draw-then-optionally-play flow should
    /// add to the hand themselves and call `next_player` explicitly.
    pub fn draw_card_for_player(&mut self) -> Card {
        let card = self.deck.draw(&mut self.rng);
        self.players[self.current_player_index].add_card(card);
        self.next_player();
        card
    }

    /// Advance to the next seat in the current direction.
    pub fn next_player(&mut self) {
        let n = self.players.len();
        self.current_player_index = if self.clockwise {
            (self.current_player_index + 1) % n
        } else {
            (self.current_player_index + n - 1) % n
        };
    }

    /// Replace the active color after a wild play. Only the four concrete
    /// colors are accepted.
    pub fn set_current_color(&mut self, color: Color) -> Result<(), GameError> {
        if matches!(color, Color::Wild) {
            return Err(GameError::WildColorOverride);
        }
        self.current_color = color;
        Ok(())
    }

    /// Drive one full turn from a bot or UI decision. Wild plays must carry
    /// a concrete replacement color, which is applied after the play
    /// resolves; the color is ignored for non-wild plays. Returns
    /// `Ok(false)` when the chosen card was illegal (nothing changed; the
    /// caller should ask again).
    pub fn apply_turn(&mut self, turn: Turn) -> Result<bool, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        match turn {
            Turn::Play { hand_index, color } => {
                let card = *self
                    .current_player()
                    .hand()
                    .get(hand_index)
                    .ok_or(GameError::HandIndex(hand_index))?;
                // Validate the replacement color before any state changes
                // so a rejected turn leaves the game untouched.
                if card.is_wild() {
                    match color {
                        None => return Err(GameError::MissingWildColor),
                        Some(Color::Wild) => return Err(GameError::WildColorOverride),
                        Some(_) => {}
                    }
                }
                let played = self.play_card(hand_index)?;
                if played && card.is_wild() {
                    if let Some(color) = color {
                        self.set_current_color(color)?;
                    }
                }
                Ok(played)
            }
            Turn::Draw => {
                self.draw_card_for_player();
                Ok(true)
            }
        }
    }

    /// Snapshot of the game as seen from `perspective`: that seat's hand
    /// plus public information about every seat.
    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let Some(viewer) = self.players.get(perspective) else {
            return Err(GameError::InvalidPlayer(perspective));
        };
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerPublicState {
                id,
                name: player.name().to_string(),
                is_computer: player.is_computer(),
                hand_size: player.hand().len(),
                is_current: id == self.current_player_index,
                has_uno: player.has_uno(),
                has_won: player.has_won(),
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            status: self.status(),
            self_player: perspective,
            current_player: self.current_player_index,
            clockwise: self.clockwise,
            current_color: self.current_color,
            top_card: self.top_card(),
            draw_pile_count: self.deck.draw_pile_len(),
            discard_pile_count: self.deck.discard_pile_len(),
            players,
            hand: viewer.hand().to_vec(),
        })
    }
}
