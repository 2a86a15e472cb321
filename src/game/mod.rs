// Public API
pub use broadcaster::SessionBroadcaster;
pub use deck::Deck;
pub use rounds::{RoundTracker, ROUND_LIMIT};
pub use session::{GameSession, SessionSnapshot};

// Internal modules
mod broadcaster;
mod deck;
mod rounds;
mod session;
