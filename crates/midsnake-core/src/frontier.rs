//! Diagonal-indexed frontier arrays for the Myers search

/// Furthest-reaching x per diagonal, for one search direction.
///
/// Diagonals run from `-max` to `max`; `slot` maps them onto the backing
/// vectors. Alongside the furthest x, each diagonal remembers the x at which
/// its last snake started, so the crossing test can recover the whole snake.
#[derive(Debug, Clone)]
pub struct Frontier {
    max: isize,
    reach: Vec<usize>,
    start: Vec<usize>,
}

impl Frontier {
    pub fn new(max: usize) -> Self {
        let len = 2 * max + 1;
        let mut frontier = Self {
            max: max as isize,
            reach: vec![0; len],
            start: vec![0; len],
        };
        // Sentinel: the d = 0 step on diagonal 0 "moves down" from diagonal 1.
        if max > 0 {
            frontier.set(1, 0, 0);
        }
        frontier
    }

    /// Backing index of diagonal `k`.
    ///
    /// # Panics
    ///
    /// If `k` is outside `[-max, max]`.
    #[inline]
    pub fn slot(&self, k: isize) -> usize {
        assert!(
            -self.max <= k && k <= self.max,
            "diagonal {k} outside frontier of size {}",
            self.max
        );
        (k + self.max) as usize
    }

    #[inline]
    pub fn reach(&self, k: isize) -> usize {
        self.reach[self.slot(k)]
    }

    #[inline]
    pub fn start(&self, k: isize) -> usize {
        self.start[self.slot(k)]
    }

    #[inline]
    pub fn set(&mut self, k: isize, start: usize, reach: usize) {
        let slot = self.slot(k);
        self.start[slot] = start;
        self.reach[slot] = reach;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_offsets_negative_diagonals() {
        let frontier = Frontier::new(3);
        assert_eq!(frontier.slot(-3), 0);
        assert_eq!(frontier.slot(0), 3);
        assert_eq!(frontier.slot(3), 6);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut frontier = Frontier::new(4);
        frontier.set(-2, 1, 3);
        assert_eq!(frontier.start(-2), 1);
        assert_eq!(frontier.reach(-2), 3);
        assert_eq!(frontier.reach(2), 0);
    }

    #[test]
    fn test_sentinel_on_diagonal_one() {
        let frontier = Frontier::new(2);
        assert_eq!(frontier.reach(1), 0);
    }

    #[test]
    #[should_panic(expected = "outside frontier")]
    fn test_out_of_range_diagonal_panics() {
        let frontier = Frontier::new(2);
        frontier.reach(3);
    }
}
