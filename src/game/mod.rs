pub mod board;
pub use board::*;

pub mod difficulty;
pub use difficulty::*;

pub mod matrix;
pub use matrix::*;

pub mod setup;
pub use setup::*;

pub mod solver;
pub use solver::*;

pub mod spot;
pub use spot::*;

pub mod strategy;
pub use strategy::*;
