use crate::item::{Item, Rank};

/// Bounded result buffer for a top-k query, kept sorted by rank (highest
/// first). Backed by storage the caller owns for the duration of one query.
pub(crate) struct TopK<'b, 'a, V, R> {
    best: &'b mut Vec<&'a Item<V, R>>,
    k: usize,
}

impl<'b, 'a, V, R: Rank> TopK<'b, 'a, V, R> {
    pub(crate) fn new(best: &'b mut Vec<&'a Item<V, R>>, k: usize) -> Self {
        best.clear();
        best.reserve(k);
        Self { best, k }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.best.len() >= self.k
    }

    /// The lowest ranked entry, if any.
    #[inline]
    pub(crate) fn worst(&self) -> Option<&'a Item<V, R>> {
        self.best.last().copied()
    }

    /// Whether something ranked `rank` would make it into the buffer. Equal
    /// ranks lose to what was found first.
    #[inline]
    fn beats_worst(&self, rank: R) -> bool {
        if !self.is_full() {
            return true;
        }
        match self.worst() {
            Some(worst) => worst.rank < rank,
            None => false,
        }
    }

    /// Offers `item` to the buffer, evicting the current worst entry if the
    /// buffer is full and `item` ranks higher.
    pub(crate) fn offer(&mut self, item: &'a Item<V, R>) {
        if !self.beats_worst(item.rank) {
            return;
        }

        if self.best.len() < self.k {
            self.best.push(item);
        } else if let Some(last) = self.best.last_mut() {
            *last = item;
        }

        // One reverse insertion-sort pass; the rest is already sorted.
        let mut i = self.best.len() - 1;
        while i > 0 && self.best[i - 1].rank < self.best[i].rank {
            self.best.swap(i - 1, i);
            i -= 1;
        }
    }

    /// Whether a subtree whose best rank is `max_rank` could still improve
    /// the result.
    #[inline]
    pub(crate) fn must_walk(&self, max_rank: R) -> bool {
        self.beats_worst(max_rank)
    }

    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}
