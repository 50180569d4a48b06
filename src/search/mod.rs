//! The automated player's move search.
//!
//! The search is brute force: every ordered selection of one to three distinct
//! rack tiles (see `SearchSetting::max_subset_size`) is tried at every anchor
//! square, in the anchor's orientation, through the same `PlayMove` protocol
//! human plays use. Attempts are made on a
//! private copy of the board, so the authoritative board is never touched.

use std::collections::HashMap;

use log::{debug, info};

use crate::command::{Command, CommandSink};
use crate::hand::Hand;
use crate::play_move::PlayMove;
use crate::position::{Board, Direction, Square, Tile, RACK_SIZE};

/// How legal plays of the same letters at different squares are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidateRecording {
    /// Every legal (letters, square, direction) triple is kept and scored
    #[default]
    Distinct,
    /// One entry per letter string. A later square overwrites an earlier one,
    /// but the entry keeps its original position in the enumeration order.
    LastWins,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSetting {
    max_subset_size: usize,
    recording: CandidateRecording,
}

impl Default for SearchSetting {
    fn default() -> Self {
        SearchSetting {
            max_subset_size: 3,
            recording: CandidateRecording::Distinct,
        }
    }
}

impl SearchSetting {
    /// Longest letter string to try. Clamped to `1..=RACK_SIZE`.
    pub fn max_subset_size(mut self, max_subset_size: usize) -> Self {
        self.max_subset_size = max_subset_size.clamp(1, RACK_SIZE);
        self
    }

    pub fn recording(mut self, recording: CandidateRecording) -> Self {
        self.recording = recording;
        self
    }

    pub fn subset_size(&self) -> usize {
        self.max_subset_size
    }

    pub fn candidate_recording(&self) -> CandidateRecording {
        self.recording
    }
}

/// A legal play found during one analysis pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The letter string tried, in placement order
    pub letters: String,
    /// Rack letters actually written to the board
    pub placed: String,
    pub square: Square,
    pub direction: Direction,
    pub score: u32,
}

impl Candidate {
    pub fn to_command(&self) -> Command {
        Command::play(&self.letters, self.square, self.direction)
    }
}

/// Search state of an automated player.
#[derive(Clone, Debug, Default)]
pub struct MoveSearch {
    setting: SearchSetting,
    scratch: Option<Board>,
    candidates: Vec<Candidate>,
    candidate_index: HashMap<String, usize>,
    strings_attempted: usize,
    placements_attempted: usize,
}

impl MoveSearch {
    pub fn new(setting: SearchSetting) -> Self {
        MoveSearch {
            setting,
            ..Default::default()
        }
    }

    pub fn setting(&self) -> &SearchSetting {
        &self.setting
    }

    /// Legal plays found by the last analysis, in enumeration order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of letter strings tried by the last analysis
    pub fn strings_attempted(&self) -> usize {
        self.strings_attempted
    }

    /// Number of placement attempts made by the last analysis
    pub fn placements_attempted(&self) -> usize {
        self.placements_attempted
    }

    /// Try every letter string from `hand` at every anchor of `board`, recording the legal ones.
    ///
    /// `board` is copied into the private scratch board first and is never modified.
    pub fn analyze_board(&mut self, board: &Board, hand: &Hand) {
        self.clear();
        let mut scratch = match self.scratch.take() {
            Some(mut scratch) => {
                scratch.copy_from(board);
                scratch
            }
            None => board.clone(),
        };
        let anchors: Vec<(Square, Direction)> = scratch.playable_squares().into_iter().collect();
        let tiles = hand.tiles();

        let mut selection = Vec::with_capacity(self.setting.max_subset_size);
        let mut used = [false; RACK_SIZE];
        for subset_size in 1..=self.setting.max_subset_size.min(tiles.len()) {
            self.enumerate_selections(
                &mut scratch,
                &anchors,
                tiles,
                subset_size,
                &mut selection,
                &mut used,
            );
        }
        debug_assert_eq!(&scratch, board, "Search left tiles on the scratch board");

        debug!(
            "Analyzed rack {} over {} anchors: {} strings, {} placements, {} legal",
            hand.letters(),
            anchors.len(),
            self.strings_attempted,
            self.placements_attempted,
            self.candidates.len()
        );
        self.scratch = Some(scratch);
    }

    /// Extend `selection` with every unused rack index until it has `subset_size` tiles,
    /// in the order nested loops over the rack would produce.
    fn enumerate_selections(
        &mut self,
        scratch: &mut Board,
        anchors: &[(Square, Direction)],
        tiles: &[Tile],
        subset_size: usize,
        selection: &mut Vec<Tile>,
        used: &mut [bool; RACK_SIZE],
    ) {
        if selection.len() == subset_size {
            self.strings_attempted += 1;
            for &(square, direction) in anchors {
                self.attempt(scratch, selection, square, direction);
            }
            return;
        }
        for (i, tile) in tiles.iter().enumerate() {
            if used[i] {
                continue;
            }
            used[i] = true;
            selection.push(*tile);
            self.enumerate_selections(scratch, anchors, tiles, subset_size, selection, used);
            selection.pop();
            used[i] = false;
        }
    }

    fn attempt(&mut self, scratch: &mut Board, tiles: &[Tile], square: Square, direction: Direction) {
        self.placements_attempted += 1;
        let mut play_move = PlayMove::new(square, tiles, scratch, direction);
        if !(play_move.place_tile() && play_move.check_word()) {
            return;
        }
        let (Some(score), Some(placement)) = (play_move.score(), play_move.placement()) else {
            return;
        };
        let candidate = Candidate {
            letters: tiles.iter().map(|tile| tile.letter()).collect(),
            placed: placement.tiles().map(|tile| tile.letter()).collect(),
            square,
            direction,
            score,
        };
        self.record(candidate);
    }

    fn record(&mut self, candidate: Candidate) {
        match self.setting.recording {
            CandidateRecording::Distinct => self.candidates.push(candidate),
            CandidateRecording::LastWins => match self.candidate_index.get(&candidate.letters) {
                Some(&i) => self.candidates[i] = candidate,
                None => {
                    self.candidate_index
                        .insert(candidate.letters.clone(), self.candidates.len());
                    self.candidates.push(candidate);
                }
            },
        }
    }

    /// The highest scoring candidate. Ties go to the first one found. Plays scoring zero are never chosen.
    pub fn best_candidate(&self) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in self.candidates.iter() {
            if candidate.score > best.map_or(0, |best| best.score) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Submit the best play found by the last analysis, or a pass if there is none.
    ///
    /// For a play, each rack letter it uses is queued for removal before the
    /// command is submitted. Candidates are cleared afterwards.
    pub fn play_highest_move<C: CommandSink>(&mut self, sink: &mut C) -> Command {
        let command = match self.best_candidate() {
            Some(best) => {
                info!(
                    "Playing {} at {} for {} points",
                    best.letters,
                    best.square.to_oriented_string(best.direction),
                    best.score
                );
                for letter in best.placed.chars() {
                    sink.remove_letter_from_hand(letter);
                }
                best.to_command()
            }
            None => {
                info!(
                    "No scoring play among {} candidates, passing",
                    self.candidates.len()
                );
                Command::Pass
            }
        };
        sink.process_command(command.clone());
        self.clear();
        command
    }

    fn clear(&mut self) {
        self.candidates.clear();
        self.candidate_index.clear();
        self.strings_attempted = 0;
        self.placements_attempted = 0;
    }
}
