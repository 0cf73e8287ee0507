pub mod record;
pub use record::*;

pub mod summary;
pub use summary::*;
