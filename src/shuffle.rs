use rand::{seq::SliceRandom, Rng};

/// Produces fresh uniform permutations of a fixed sequence.
///
/// The original is captured once and never touched again; every call to
/// [`Shuffler::shuffled`] starts over from it rather than from the previous
/// result.
pub struct Shuffler<T, R> {
    original: Vec<T>,
    queue: Vec<T>,
    rng: R,
}

impl<T: Clone, R: Rng> Shuffler<T, R> {
    pub fn new(items: &[T], rng: R) -> Self {
        Self {
            original: items.to_vec(),
            queue: Vec::new(),
            rng,
        }
    }

    pub fn reshuffle(&mut self) {
        self.queue = self.original.clone();
        self.queue.shuffle(&mut self.rng);
    }

    pub fn shuffled(&mut self) -> &[T] {
        self.reshuffle();
        &self.queue
    }

    pub fn original(&self) -> &[T] {
        &self.original
    }

    /// Result of the last shuffle; empty before the first one.
    pub fn queue(&self) -> &[T] {
        &self.queue
    }
}
