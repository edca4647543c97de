pub mod board;
pub mod movement;
pub mod puzzle;
pub mod search;
