use crate::core::RingBuffer;

/// Where a pattern best aligns inside a search buffer
///
/// `index` is the logical index in the search buffer where the aligned run
/// starts, `length` is how many leading pattern bytes matched there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub index: usize,
    pub length: usize,
}

impl Match {
    /// True when no position matched the pattern's first byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<const N: usize> RingBuffer<N> {
    /// Finds the most recently queued occurrence of `data`.
    ///
    /// Scans from the newest byte down to the oldest and returns the logical
    /// index of the first hit, or `None` if the byte is absent.
    #[must_use]
    pub fn search(&self, data: u8) -> Option<usize> {
        (0..self.num_items())
            .rev()
            .find(|&index| self.peek(index) == Some(data))
    }

    /// Finds where a prefix of `pattern` best aligns against a run in this buffer.
    ///
    /// Only positions holding the pattern's first byte are candidates. From each
    /// candidate the common run with `pattern` is extended as far as both buffers
    /// allow. The longest run wins; on equal length the oldest position is kept.
    ///
    /// A longer alignment that does not start with the pattern's first byte is
    /// never found. Returns `Match::default()` (index 0, length 0) when the
    /// pattern is empty or its first byte never occurs. Neither buffer changes.
    #[must_use]
    pub fn best_match<const M: usize>(&self, pattern: &RingBuffer<M>) -> Match {
        let mut best = Match::default();
        let Some(anchor) = pattern.peek(0) else {
            return best;
        };

        let search_len = self.num_items();
        let pattern_len = pattern.num_items();

        for i in 0..search_len {
            if self.peek(i) != Some(anchor) {
                continue;
            }

            let max_j = (search_len - i).min(pattern_len);
            let mut j = 1;
            while j < max_j {
                match (pattern.peek(j), self.peek(i + j)) {
                    (Some(expected), Some(actual)) if expected == actual => j += 1,
                    _ => break,
                }
            }

            if j > best.length {
                best = Match {
                    index: i,
                    length: j,
                };
            }
        }

        best
    }
}
