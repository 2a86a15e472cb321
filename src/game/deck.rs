use rand::seq::SliceRandom;

/// The shuffled serving order of images, plus a cursor to the next
/// unserved entry.
///
/// A deck is immutable once built; the only way to change it is to
/// build a replacement. It remembers the listing it was built from so
/// the broadcaster can detect out-of-band changes to the source
/// directory.
#[derive(Debug, Clone)]
pub struct Deck {
    order: Vec<String>,
    built_from: Vec<String>,
    cursor: usize,
}

impl Deck {
    /// Build a deck from a fresh image listing.
    ///
    /// The serving order is a uniform random permutation of the input
    /// (`shuffle` is an unbiased Fisher-Yates).
    pub fn build(images: Vec<String>) -> Self {
        let built_from = images.clone();
        let mut order = images;
        order.shuffle(&mut rand::rng());
        Self {
            order,
            built_from,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of images not yet served.
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// Serve the next image, advancing the cursor. `None` once the deck
    /// is exhausted; callers check `remaining()` first.
    pub fn next(&mut self) -> Option<String> {
        let image = self.order.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(image)
    }

    /// Whether a fresh listing differs from the listing this deck was
    /// built from: different length, or any built-from entry missing
    /// from the fresh listing.
    pub fn source_changed(&self, current: &[String]) -> bool {
        current.len() != self.built_from.len()
            || self
                .built_from
                .iter()
                .any(|image| !current.contains(image))
    }
}
