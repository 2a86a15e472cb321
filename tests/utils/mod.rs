pub mod assertions;
pub mod mocks;
pub mod setup;

pub use assertions::*;
pub use mocks::*;
pub use setup::*;
