pub mod exchange;
pub use exchange::*;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;
