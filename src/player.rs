//! Players: score and rack bookkeeping, and whether moves come from a human or the search.

use log::{debug, warn};
use rand::Rng;

use crate::bag::Bag;
use crate::command::RecordedTurn;
use crate::hand::{Hand, HandError};
use crate::position::{Board, Tile, RACK_SIZE};
use crate::search::MoveSearch;

/// Where a player's moves come from.
#[derive(Clone, Debug)]
pub enum PlayerKind {
    /// Moves are entered through the command interface
    Human,
    /// Moves are supplied by the player's own search state
    Automated(MoveSearch),
}

#[derive(Clone, Debug)]
pub struct Player {
    number: usize,
    points: i32,
    active: bool,
    hand: Hand,
    kind: PlayerKind,
}

impl Player {
    pub fn new(number: usize, kind: PlayerKind) -> Self {
        Player {
            number,
            points: 0,
            active: false,
            hand: Hand::new(),
            kind,
        }
    }

    pub fn human(number: usize) -> Self {
        Self::new(number, PlayerKind::Human)
    }

    pub fn automated(number: usize, search: MoveSearch) -> Self {
        Self::new(number, PlayerKind::Automated(search))
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn add_points(&mut self, points: i32) {
        self.points += points;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.kind, PlayerKind::Automated(_))
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Give the player their opening rack. Fails without changes unless exactly seven tiles are given
    /// to an empty hand.
    pub fn initialize_hand(&mut self, tiles: &[Tile]) -> Result<(), HandError> {
        if tiles.len() != RACK_SIZE {
            return Err(HandError::WrongInitialSize(tiles.len()));
        }
        if !self.hand.is_empty() {
            return Err(HandError::Overflow {
                size: self.hand.len(),
                adding: tiles.len(),
            });
        }
        self.hand.add_tiles(tiles, false)?;
        self.hand.clear_history();
        Ok(())
    }

    /// Swap `letters` for the same number of tiles from the bag.
    ///
    /// The hand must end up the same size it started. On any failure the hand is
    /// rolled back to its previous contents and order, and the drawn tiles go back
    /// on top of the bag in draw order.
    pub fn exchange<R: Rng>(
        &mut self,
        letters: &[char],
        bag: &mut Bag,
        rng: &mut R,
    ) -> Result<(), HandError> {
        let size_before = self.hand.len();
        self.hand.clear_history();

        let removed = match self.hand.remove_letters(letters, true) {
            Ok(removed) => removed,
            Err(err) => {
                warn!("Player {} can't exchange: {}", self.number, err);
                self.hand.roll_back();
                return Err(err);
            }
        };

        let drawn = bag.draw(removed.len());
        if let Err(err) = self.hand.add_tiles(&drawn, true) {
            warn!("Player {} can't take exchanged tiles: {}", self.number, err);
            self.hand.roll_back();
            bag.put_back(&drawn);
            return Err(err);
        }

        if self.hand.len() != size_before {
            let err = HandError::UnexpectedSize(self.hand.len());
            warn!("Player {} exchange aborted: {}", self.number, err);
            self.hand.roll_back();
            bag.put_back(&drawn);
            return Err(err);
        }

        bag.return_tiles(&removed, rng);
        debug!(
            "Player {} exchanged {} tiles, hand is now {}",
            self.number,
            removed.len(),
            self.hand
        );
        Ok(())
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.hand.shuffle(rng);
    }

    /// Undo the hand's recorded mutations.
    pub fn roll_back(&mut self) {
        self.hand.roll_back();
    }

    /// For an automated player, analyze `board` and record the submitted turn.
    /// Human players return `None`.
    pub fn supply_turn(&mut self, board: &Board) -> Option<RecordedTurn> {
        match &mut self.kind {
            PlayerKind::Human => None,
            PlayerKind::Automated(search) => {
                search.analyze_board(board, &self.hand);
                let mut turn = RecordedTurn::default();
                search.play_highest_move(&mut turn);
                Some(turn)
            }
        }
    }
}
