//! The authoritative game: board, bag, both players, and turn order.

use std::mem;

use board_game_traits::{Color, GameResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::bag::Bag;
use crate::command::{Command, CommandSink, RecordedTurn};
use crate::hand::HandError;
use crate::play_move::PlayMove;
use crate::player::Player;
use crate::position::{Board, Direction, SharedDictionary, Square, Tile, BLANK, RACK_SIZE};

/// The game ends after this many turns in a row without points.
pub const MAX_SCORELESS_TURNS: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is not a legal play")]
    IllegalPlay(String),
    #[error("queued removals {queued} don't match the tiles played, {played}")]
    RemovalMismatch { queued: String, played: String },
    #[error("can't exchange with {0} tiles left in the bag")]
    BagTooSmall(usize),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Everything a turn changes. Undo and redo swap whole snapshots of it.
#[derive(Clone, Debug)]
struct GameState {
    board: Board,
    bag: Bag,
    players: [Player; 2],
    side_to_move: Color,
    scoreless_turns: u8,
    result: Option<GameResult>,
    moves: Vec<Command>,
}

/// A two player game. White moves first.
pub struct Game {
    state: GameState,
    undo_stack: Vec<GameState>,
    redo_stack: Vec<GameState>,
    pending_removals: Vec<char>,
    rng: StdRng,
}

fn seat(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

/// Letters that select the same rack tile compare equal.
fn rack_key(letter: char) -> char {
    if letter == BLANK || letter.is_ascii_lowercase() {
        BLANK
    } else {
        letter
    }
}

fn sorted_rack_keys(letters: &[char]) -> Vec<char> {
    let mut keys: Vec<char> = letters.iter().copied().map(rack_key).collect();
    keys.sort_unstable();
    keys
}

impl Game {
    /// Start a game with a freshly shuffled standard bag.
    pub fn new(dictionary: SharedDictionary, players: [Player; 2], seed: u64) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let bag = Bag::standard(&mut rng);
        Self::start(dictionary, players, bag, rng)
    }

    /// Start a game drawing from a prepared bag. Racks are dealt White first.
    pub fn with_bag(
        dictionary: SharedDictionary,
        players: [Player; 2],
        bag: Bag,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::start(dictionary, players, bag, StdRng::seed_from_u64(seed))
    }

    fn start(
        dictionary: SharedDictionary,
        mut players: [Player; 2],
        mut bag: Bag,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        for player in players.iter_mut() {
            player.initialize_hand(&bag.draw(RACK_SIZE))?;
        }
        players[0].set_active(true);
        players[1].set_active(false);
        Ok(Game {
            state: GameState {
                board: Board::new(dictionary),
                bag,
                players,
                side_to_move: Color::White,
                scoreless_turns: 0,
                result: None,
                moves: vec![],
            },
            undo_stack: vec![],
            redo_stack: vec![],
            pending_removals: vec![],
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn bag(&self) -> &Bag {
        &self.state.bag
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.state.players[seat(color)]
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn scoreless_turns(&self) -> u8 {
        self.state.scoreless_turns
    }

    /// Turn-ending commands played so far
    pub fn moves(&self) -> &[Command] {
        &self.state.moves
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.state.result
    }

    /// Letters queued through `remove_letter_from_hand` that the next play will consume
    pub fn pending_removals(&self) -> &[char] {
        &self.pending_removals
    }

    /// Apply a command for the side to move.
    ///
    /// A rejected command leaves the game unchanged. Every command except
    /// `Shuffle` passes the turn.
    pub fn process(&mut self, command: Command) -> Result<(), GameError> {
        if self.state.result.is_some() {
            self.pending_removals.clear();
            return Err(GameError::GameOver);
        }
        let before = self.state.clone();
        let removals = mem::take(&mut self.pending_removals);

        let outcome = match &command {
            Command::Play {
                letters,
                square,
                direction,
            } => self.play(letters, *square, *direction, &removals),
            Command::Pass => Ok(0),
            Command::Exchange(letters) => self.exchange(letters).map(|()| 0),
            Command::Shuffle => {
                let rng = &mut self.rng;
                self.state.players[seat(self.state.side_to_move)].shuffle(rng);
                Ok(0)
            }
        };

        let points = match outcome {
            Ok(points) => points,
            Err(err) => {
                self.state = before;
                return Err(err);
            }
        };
        if command.ends_turn() {
            self.undo_stack.push(before);
            self.redo_stack.clear();
            self.state.moves.push(command);
            self.end_turn(points);
        }
        Ok(())
    }

    fn play(
        &mut self,
        letters: &str,
        start: Square,
        direction: Direction,
        removals: &[char],
    ) -> Result<u32, GameError> {
        let state = &mut self.state;
        let illegal = || GameError::IllegalPlay(format!("{} {}", letters, start.to_oriented_string(direction)));

        // Letters passing over an equal tile on the board don't come from the rack
        let mut tiles = Vec::with_capacity(letters.len());
        let mut consumed = vec![];
        for (i, letter) in letters.chars().enumerate() {
            let face = letter.to_ascii_uppercase();
            let existing = start
                .jump(direction, i)
                .and_then(|square| state.board.occupant(square));
            match existing {
                Some(tile) if tile.letter() == face => tiles.push(tile),
                _ => {
                    consumed.push(letter);
                    let tile = if letter.is_ascii_lowercase() {
                        Tile::blank().bind(letter)
                    } else {
                        Tile::standard(letter)
                    };
                    tiles.push(tile.ok_or_else(illegal)?);
                }
            }
        }

        let to_remove = if removals.is_empty() {
            consumed.clone()
        } else {
            removals.to_vec()
        };
        if sorted_rack_keys(&to_remove) != sorted_rack_keys(&consumed) {
            warn!(
                "Removals {:?} queued for a play consuming {:?}",
                to_remove, consumed
            );
            return Err(GameError::RemovalMismatch {
                queued: to_remove.iter().collect(),
                played: consumed.iter().collect(),
            });
        }

        let player = &mut state.players[seat(state.side_to_move)];
        player.hand_mut().clear_history();
        player.hand_mut().remove_letters(&to_remove, true)?;

        let mut play_move = PlayMove::new(start, &tiles, &mut state.board, direction);
        if !(play_move.place_tile() && play_move.check_word()) {
            drop(play_move);
            player.roll_back();
            return Err(illegal());
        }
        let (placement, score) = match play_move.commit() {
            Some(committed) => committed,
            None => {
                player.roll_back();
                return Err(illegal());
            }
        };

        player.add_points(score as i32);
        let drawn = state.bag.draw(placement.len());
        player.hand_mut().add_tiles(&drawn, false)?;
        player.hand_mut().clear_history();
        info!(
            "Player {} played {} at {} for {} points",
            player.number(),
            letters,
            start.to_oriented_string(direction),
            score
        );
        Ok(score)
    }

    fn exchange(&mut self, letters: &[char]) -> Result<(), GameError> {
        let state = &mut self.state;
        if state.bag.len() < RACK_SIZE {
            return Err(GameError::BagTooSmall(state.bag.len()));
        }
        let player = &mut state.players[seat(state.side_to_move)];
        player.exchange(letters, &mut state.bag, &mut self.rng)?;
        player.hand_mut().clear_history();
        Ok(())
    }

    fn end_turn(&mut self, points: u32) {
        let state = &mut self.state;
        if points > 0 {
            state.scoreless_turns = 0;
        } else {
            state.scoreless_turns += 1;
        }

        let mover = seat(state.side_to_move);
        if state.bag.is_empty() && state.players[mover].hand().is_empty() {
            self.finish(Some(mover));
        } else if state.scoreless_turns >= MAX_SCORELESS_TURNS {
            self.finish(None);
        } else {
            state.players[mover].set_active(false);
            state.side_to_move = !state.side_to_move;
            state.players[seat(state.side_to_move)].set_active(true);
        }
    }

    /// Subtract what is left on each rack. A player who went out gains the opponent's remainder.
    fn finish(&mut self, went_out: Option<usize>) {
        let state = &mut self.state;
        let remainders: Vec<i32> = state
            .players
            .iter()
            .map(|player| player.hand().total_points() as i32)
            .collect();
        for (i, player) in state.players.iter_mut().enumerate() {
            player.add_points(-remainders[i]);
            player.set_active(false);
        }
        if let Some(winner) = went_out {
            let bonus: i32 = remainders.iter().sum();
            state.players[winner].add_points(bonus);
        }

        let (white, black) = (state.players[0].points(), state.players[1].points());
        let result = if white > black {
            GameResult::WhiteWin
        } else if black > white {
            GameResult::BlackWin
        } else {
            GameResult::Draw
        };
        info!("Game over, {} to {}: {:?}", white, black, result);
        state.result = Some(result);
    }

    /// If the side to move is automated, let it search the board and apply its turn.
    ///
    /// Returns the command it played, or `None` for a human player.
    pub fn play_automated_turn(&mut self) -> Result<Option<Command>, GameError> {
        if self.state.result.is_some() {
            return Err(GameError::GameOver);
        }
        let GameState { board, players, side_to_move, .. } = &mut self.state;
        let Some(turn) = players[seat(*side_to_move)].supply_turn(board) else {
            return Ok(None);
        };
        let command = turn.commands.last().cloned();
        self.apply_turn(turn)?;
        Ok(command)
    }

    /// Apply a turn recorded through the command boundary.
    pub fn apply_turn(&mut self, turn: RecordedTurn) -> Result<(), GameError> {
        debug!(
            "Applying {} removals and {} commands",
            turn.removals.len(),
            turn.commands.len()
        );
        self.pending_removals = turn.removals;
        for command in turn.commands {
            self.process(command)?;
        }
        Ok(())
    }

    /// Take back the last turn. Returns false if there is nothing to take back.
    pub fn undo(&mut self) -> bool {
        self.pending_removals.clear();
        match self.undo_stack.pop() {
            Some(previous) => {
                let current = mem::replace(&mut self.state, previous);
                self.redo_stack.push(current);
                true
            }
            None => false,
        }
    }

    /// Replay the last undone turn. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.pending_removals.clear();
        match self.redo_stack.pop() {
            Some(next) => {
                let current = mem::replace(&mut self.state, next);
                self.undo_stack.push(current);
                true
            }
            None => false,
        }
    }
}

impl CommandSink for Game {
    fn remove_letter_from_hand(&mut self, letter: char) {
        self.pending_removals.push(letter);
    }

    fn process_command(&mut self, command: Command) {
        let notation = command.to_string();
        if let Err(err) = self.process(command) {
            warn!("Rejected \"{}\": {}", notation, err);
        }
    }
}
