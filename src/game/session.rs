use super::deck::Deck;
use super::rounds::{RoundTracker, ROUND_LIMIT};

/// The one shared game: a deck and its round tracker.
///
/// There is exactly one session in the whole process; it lives for the
/// process lifetime and is only ever reset in place by a rebuild.
#[derive(Debug)]
pub struct GameSession {
    pub deck: Deck,
    pub rounds: RoundTracker,
}

/// Point-in-time view of the session, as sent to clients in "config"
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub rounds: usize,
    pub shown: usize,
    pub in_progress: bool,
    pub deck_remaining: usize,
}

impl GameSession {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            deck: Deck::build(images),
            rounds: RoundTracker::new(),
        }
    }

    /// Replace the deck with one built from a fresh listing and reset
    /// round progress.
    pub fn rebuild(&mut self, images: Vec<String>) {
        self.deck = Deck::build(images);
        self.rounds.reset();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rounds: ROUND_LIMIT,
            shown: self.rounds.shown(),
            in_progress: self.rounds.in_progress(),
            deck_remaining: self.deck.remaining(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(vec!["a.png".to_string(), "b.jpg".to_string()]);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.rounds, ROUND_LIMIT);
        assert_eq!(snapshot.shown, 0);
        assert!(!snapshot.in_progress);
        assert_eq!(snapshot.deck_remaining, 2);
    }

    #[test]
    fn test_rebuild_resets_progress() {
        let mut session = GameSession::new(vec!["a.png".to_string(), "b.jpg".to_string()]);
        session.deck.next();
        session.rounds.mark_shown();

        session.rebuild(vec![
            "a.png".to_string(),
            "b.jpg".to_string(),
            "c.gif".to_string(),
        ]);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.shown, 0);
        assert!(!snapshot.in_progress);
        assert_eq!(snapshot.deck_remaining, 3);
    }
}
