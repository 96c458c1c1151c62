//! Pokémon game implementation.

use crate::agents::Agent;
use crate::cards::{Card, TrainerEffect};
use crate::core::{
    ActionRecord, GameConfig, GameEvent, GameRng, GameState, Phase, PlayerId, SetupError,
    TurnAction, TurnFault,
};
use crate::rules::{GameResult, RulesEngine, TurnReport};
use crate::zones::Deck;

/// The two-player engine: setup, turn resolution and termination.
#[derive(Clone, Debug)]
pub struct PokemonGame {
    config: GameConfig,
}

/// Builder for creating a PokemonGame and its initial state.
pub struct PokemonGameBuilder {
    config: GameConfig,
    names: [String; 2],
    deck: Option<Deck>,
}

impl Default for PokemonGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            names: ["Player 1".to_string(), "Player 2".to_string()],
            deck: None,
        }
    }
}

impl PokemonGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pokemon_count(mut self, count: usize) -> Self {
        self.config.pokemon_count = count;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config.max_turns = Some(max_turns);
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    /// Use this deck instead of filling a random one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Use the fixed 60-card deck.
    pub fn standard_deck(self) -> Self {
        self.deck(Deck::standard())
    }

    /// Build the game and a dealt initial state.
    pub fn build(self, seed: u64) -> Result<(PokemonGame, GameState), SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build with an existing RNG (e.g. `GameRng::from_entropy()`).
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<(PokemonGame, GameState), SetupError> {
        self.config.validate()?;

        let deck = match self.deck {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::new();
                deck.fill(&self.config, &mut rng)?;
                deck
            }
        };

        let [first, second] = self.names;
        let game = PokemonGame::new(self.config);
        let mut state = GameState::new(deck, first, second, rng);
        game.setup(&mut state)?;

        Ok((game, state))
    }
}

impl PokemonGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Shuffle the deck, deal opening hands, promote a Pokémon for each
    /// player, and hand the first turn to `PlayerId::FIRST`.
    ///
    /// Fails without touching the state if the state is past `Setup` or
    /// the deck is empty.
    pub fn setup(&self, state: &mut GameState) -> Result<(), SetupError> {
        if state.phase() != Phase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        if state.deck.is_empty() {
            return Err(SetupError::EmptyDeck);
        }

        state.deck.shuffle(&mut state.rng);

        for seat in PlayerId::all() {
            for _ in 0..self.config.hand_size {
                let Some(card) = state.deck.draw_random(&mut state.rng) else {
                    break;
                };
                state.players[seat].draw_card(card);
            }

            let player = &mut state.players[seat];
            let name = player.name().to_string();
            let event = match player.draw_pokemon() {
                Some(pokemon) => GameEvent::Promoted {
                    player: seat,
                    name,
                    pokemon: pokemon.name.clone(),
                },
                None => GameEvent::OutOfPokemon { player: seat, name },
            };
            state.push_event(event);
        }

        state.push_event(GameEvent::GameStarted {
            deck_remaining: state.deck.len(),
        });
        state.begin(PlayerId::FIRST);
        Ok(())
    }

    /// Play turns until the game ends, asking each side's agent for its
    /// action.
    ///
    /// Returns `None` if the state was never set up. With no `max_turns`
    /// configured this loops for as long as both sides keep a Pokémon.
    pub fn run<A, B>(&mut self, state: &mut GameState, first: &mut A, second: &mut B) -> Option<GameResult>
    where
        A: Agent<Self>,
        B: Agent<Self>,
    {
        while let Some(player) = state.current_player() {
            let action = if player == PlayerId::FIRST {
                first.choose_action(self, state, player)
            } else {
                second.choose_action(self, state, player)
            };
            self.apply_action(state, player, action);
        }
        state.result()
    }

    fn use_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        move_index: usize,
    ) -> Result<Vec<GameEvent>, TurnFault> {
        let (me, them) = state.players.pair_mut(player);

        let attacker = me
            .active_pokemon()
            .filter(|p| !p.is_fainted())
            .ok_or(TurnFault::NoActivePokemon)?;
        let chosen = attacker
            .get_move(move_index)
            .ok_or(TurnFault::InvalidMove {
                index: move_index,
                available: attacker.moves().len(),
            })?
            .clone();

        let target = them.active_pokemon_mut().ok_or(TurnFault::NoTarget)?;
        target.take_damage(chosen.damage());

        Ok(vec![GameEvent::MoveUsed {
            player,
            name: me.name().to_string(),
            move_name: chosen.name().to_string(),
            damage: chosen.damage(),
            target: target.name.clone(),
            remaining_hp: target.hit_points(),
        }])
    }

    fn use_trainer(
        &self,
        state: &mut GameState,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<Vec<GameEvent>, TurnFault> {
        let outcome = state.players[player].use_trainer_card(hand_index, &mut state.deck)?;

        let event = GameEvent::TrainerUsed {
            player,
            name: state.player(player).name().to_string(),
            trainer: outcome.card.to_string(),
            effect: outcome.effect,
        };
        state.discard(outcome.card);
        Ok(vec![event])
    }

    /// Discard fainted active Pokémon and promote replacements from hand.
    ///
    /// The opponent is checked first since only they can have been hit.
    fn resolve_knockouts(&self, state: &mut GameState, acting: PlayerId) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for seat in [acting.opponent(), acting] {
            if let Some(fainted) = state.player_mut(seat).discard_fainted() {
                events.push(GameEvent::Fainted {
                    player: seat,
                    pokemon: fainted.name.clone(),
                });
                state.discard(Card::Pokemon(fainted));
            }

            let player = state.player_mut(seat);
            if player.active_pokemon().is_none() {
                let name = player.name().to_string();
                if let Some(pokemon) = player.draw_pokemon() {
                    events.push(GameEvent::Promoted {
                        player: seat,
                        name,
                        pokemon: pokemon.name.clone(),
                    });
                }
            }
        }

        events
    }

    /// Decide whether the turn just played by `acting` ended the game.
    fn check_termination(&self, state: &GameState, acting: PlayerId) -> Option<GameResult> {
        let opponent = acting.opponent();
        if !state.player(opponent).is_out_of_pokemon() {
            return self
                .config
                .max_turns
                .filter(|&max| state.turn_number() >= max)
                .map(|_| GameResult::Draw);
        }

        if state.player(acting).is_out_of_pokemon() {
            Some(GameResult::Draw)
        } else {
            Some(GameResult::Winner(acting))
        }
    }

    fn rejected(state: &GameState, player: PlayerId, action: TurnAction, fault: TurnFault) -> GameEvent {
        GameEvent::Rejected {
            player,
            name: state.player(player).name().to_string(),
            action,
            fault,
        }
    }
}

impl RulesEngine for PokemonGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<TurnAction> {
        if state.current_player() != Some(player) {
            return vec![];
        }

        let me = state.player(player);
        let them = state.player(player.opponent());
        let mut actions = Vec::new();

        if let Some(active) = me.active_pokemon() {
            if me.has_active_pokemon() && them.has_active_pokemon() {
                actions.extend(
                    (0..active.moves().len()).map(|move_index| TurnAction::UseMove { move_index }),
                );
            }
        }

        for (hand_index, card) in me.hand().iter().enumerate() {
            let Some(trainer) = card.as_trainer() else {
                continue;
            };
            let usable = match trainer.effect {
                TrainerEffect::Heal { .. } => me.active_pokemon().is_some(),
                TrainerEffect::Draw { cards } => state.deck.len() >= cards as usize,
            };
            if usable {
                actions.push(TurnAction::UseTrainer { hand_index });
            }
        }

        actions
    }

    fn apply_action(&mut self, state: &mut GameState, player: PlayerId, action: TurnAction) -> TurnReport {
        let turn = state.turn_number();

        // Out-of-turn and post-game actions leave the state untouched.
        let fault = match state.phase() {
            Phase::Turn(current) if current == player => None,
            Phase::GameOver(_) => Some(TurnFault::GameOver),
            Phase::Setup | Phase::Turn(_) => Some(TurnFault::NotYourTurn),
        };
        if let Some(fault) = fault {
            return TurnReport {
                player,
                action,
                turn,
                events: vec![Self::rejected(state, player, action, fault)],
                result: state.result(),
            };
        }

        let mut events = vec![GameEvent::TurnStarted {
            player,
            name: state.player(player).name().to_string(),
            turn,
        }];

        let outcome = match action {
            TurnAction::UseMove { move_index } => self.use_move(state, player, move_index),
            TurnAction::UseTrainer { hand_index } => self.use_trainer(state, player, hand_index),
            TurnAction::Invalid => Err(TurnFault::InvalidAction),
        };
        let applied = outcome.is_ok();
        match outcome {
            Ok(effects) => events.extend(effects),
            Err(fault) => events.push(Self::rejected(state, player, action, fault)),
        }

        events.extend(self.resolve_knockouts(state, player));
        state.record_action(ActionRecord::new(player, action, turn, applied));

        let result = self.check_termination(state, player);
        match result {
            Some(result) => {
                for seat in [player.opponent(), player] {
                    let side = state.player(seat);
                    if side.is_out_of_pokemon() {
                        events.push(GameEvent::OutOfPokemon {
                            player: seat,
                            name: side.name().to_string(),
                        });
                    }
                }
                events.push(GameEvent::GameOver {
                    result,
                    winner: result.winner().map(|w| state.player(w).name().to_string()),
                });
                state.finish(result);
            }
            None => state.advance_turn(player.opponent()),
        }

        for event in &events {
            state.push_event(event.clone());
        }

        TurnReport {
            player,
            action,
            turn,
            events,
            result,
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }
}
