pub mod bag;
pub mod command;
pub mod dictionary;
pub mod game;
pub mod hand;
pub mod play_move;
pub mod player;
pub mod position;
pub mod search;

#[cfg(test)]
mod tests;
