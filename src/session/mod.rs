pub mod error;
pub use error::*;

pub mod session;
pub use session::*;

pub mod tally;
pub use tally::*;
