//! A single atomic play attempt: place tiles, then check the words they form.
//!
//! Human and automated plays go through the same protocol. A `PlayMove` borrows
//! the board mutably for the whole attempt, and any tiles it wrote are cleared
//! again when it is dropped, unless the attempt was committed.

use std::mem;

use crate::position::{Board, Direction, Placement, Square, Tile};

#[derive(Debug)]
enum TrialState {
    Pending,
    Placed(Placement),
    Checked(Placement, u32),
    Rejected,
    Committed,
}

pub struct PlayMove<'a> {
    board: &'a mut Board,
    start: Square,
    tiles: Vec<Tile>,
    direction: Direction,
    state: TrialState,
}

impl<'a> PlayMove<'a> {
    /// Prepare an attempt. Does not touch the board.
    pub fn new(start: Square, tiles: &[Tile], board: &'a mut Board, direction: Direction) -> Self {
        PlayMove {
            board,
            start,
            tiles: tiles.to_vec(),
            direction,
            state: TrialState::Pending,
        }
    }

    /// Physically place the tiles. Returns false, leaving the board unchanged,
    /// if the placement is impossible.
    pub fn place_tile(&mut self) -> bool {
        if !matches!(self.state, TrialState::Pending) {
            return matches!(
                self.state,
                TrialState::Placed(_) | TrialState::Checked(_, _)
            );
        }
        match self
            .board
            .place_tiles(self.start, &self.tiles, self.direction)
        {
            Some(placement) => {
                self.state = TrialState::Placed(placement);
                true
            }
            None => {
                self.state = TrialState::Rejected;
                false
            }
        }
    }

    /// Check the main word and every crossing word. On failure the placed tiles are cleared
    /// immediately. Always false unless `place_tile` succeeded first.
    pub fn check_word(&mut self) -> bool {
        match mem::replace(&mut self.state, TrialState::Rejected) {
            TrialState::Placed(placement) => {
                if self.board.check_words(&placement) {
                    let score = self.board.move_score(&placement);
                    self.state = TrialState::Checked(placement, score);
                    true
                } else {
                    self.board.retract(&placement);
                    false
                }
            }
            state @ TrialState::Checked(_, _) => {
                self.state = state;
                true
            }
            state => {
                self.state = state;
                false
            }
        }
    }

    /// Score of a legal attempt, available after a successful `check_word`.
    pub fn score(&self) -> Option<u32> {
        match self.state {
            TrialState::Checked(_, score) => Some(score),
            _ => None,
        }
    }

    pub fn placement(&self) -> Option<&Placement> {
        match &self.state {
            TrialState::Placed(placement) | TrialState::Checked(placement, _) => Some(placement),
            _ => None,
        }
    }

    /// Words formed by the attempt, main word first. Empty unless tiles are on the board.
    pub fn words(&self) -> Vec<String> {
        match self.placement() {
            Some(placement) => self
                .board
                .words_formed(placement)
                .iter()
                .filter(|word| word.len() >= 2)
                .map(|word| self.board.word_string(word))
                .collect(),
            None => vec![],
        }
    }

    /// Keep the tiles on the board. Only a checked attempt can be committed,
    /// otherwise the attempt is rolled back and `None` is returned.
    pub fn commit(mut self) -> Option<(Placement, u32)> {
        match mem::replace(&mut self.state, TrialState::Committed) {
            TrialState::Checked(placement, score) => {
                self.board.commit(&placement);
                Some((placement, score))
            }
            state => {
                self.state = state;
                None
            }
        }
    }
}

impl Drop for PlayMove<'_> {
    fn drop(&mut self) {
        if let TrialState::Placed(placement) | TrialState::Checked(placement, _) = &self.state {
            self.board.retract(placement);
        }
    }
}
