//! Windowed view over the two sequences being compared

use crate::point::Point;

/// A rectangle `[tl, br)` of the edit graph over two borrowed sequences.
///
/// Every constructor trims the common prefix and suffix of the window, so a
/// non-empty area never starts or ends with a pair of equal elements. The
/// sequences are only borrowed; sub-areas share the same slices.
#[derive(Debug)]
pub struct Area<'a, T> {
    a: &'a [T],
    b: &'a [T],
    tl: Point,
    br: Point,
    n: usize,
    m: usize,
}

// Manual impls: the derives would needlessly require `T: Clone`.
impl<T> Clone for Area<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Area<'_, T> {}

impl<'a, T: PartialEq> Area<'a, T> {
    /// The whole edit graph of `a` against `b`, trimmed
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut area = Self {
            a,
            b,
            tl: Point::ORIGIN,
            br: Point::new(a.len(), b.len()),
            n: 0,
            m: 0,
        };
        area.trim();
        area
    }

    /// A sub-window of this area, trimmed.
    ///
    /// # Panics
    ///
    /// If either corner lies outside `self` or `tl` is not above-left of `br`.
    pub fn sub(&self, tl: Point, br: Point) -> Self {
        assert!(
            self.contains_abs(tl) && self.contains_abs(br),
            "sub-area {tl}..{br} outside of {}..{}",
            self.tl,
            self.br
        );
        assert!(br.dominates(tl), "sub-area corners inverted: {tl}..{br}");
        let mut area = Self {
            a: self.a,
            b: self.b,
            tl,
            br,
            n: 0,
            m: 0,
        };
        area.trim();
        area
    }

    fn trim(&mut self) {
        while self.tl.x < self.br.x
            && self.tl.y < self.br.y
            && self.a[self.tl.x] == self.b[self.tl.y]
        {
            self.tl = self.tl.offset(1, 1);
        }
        while self.br.x > self.tl.x
            && self.br.y > self.tl.y
            && self.a[self.br.x - 1] == self.b[self.br.y - 1]
        {
            self.br = Point::new(self.br.x - 1, self.br.y - 1);
        }
        self.n = self.br.x - self.tl.x;
        self.m = self.br.y - self.tl.y;
    }
}

impl<'a, T> Area<'a, T> {
    /// Element of the old sequence at offset `i` from `tl`
    #[inline]
    pub fn a(&self, i: usize) -> &'a T {
        &self.a[self.tl.x + i]
    }

    /// Element of the new sequence at offset `i` from `tl`
    #[inline]
    pub fn b(&self, i: usize) -> &'a T {
        &self.b[self.tl.y + i]
    }

    /// Element of the old sequence at offset `i` backwards from `br`
    #[inline]
    pub fn ra(&self, i: usize) -> &'a T {
        &self.a[self.br.x - 1 - i]
    }

    /// Element of the new sequence at offset `i` backwards from `br`
    #[inline]
    pub fn rb(&self, i: usize) -> &'a T {
        &self.b[self.br.y - 1 - i]
    }

    /// Width after trimming
    pub fn n(&self) -> usize {
        self.n
    }

    /// Height after trimming
    pub fn m(&self) -> usize {
        self.m
    }

    pub fn tl(&self) -> Point {
        self.tl
    }

    pub fn br(&self) -> Point {
        self.br
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0 && self.m == 0
    }

    /// Translate a forward-relative point to absolute coordinates
    pub fn abs_point(&self, rel: Point) -> Point {
        self.tl.offset(rel.x, rel.y)
    }

    /// Translate a backward-relative point (measured from `br`) to absolute
    /// coordinates
    pub fn abs_point_r(&self, rel: Point) -> Point {
        Point::new(
            self.tl.x + self.n - rel.x,
            self.tl.y + self.m - rel.y,
        )
    }

    /// The backward diagonal that mirrors forward diagonal `k`
    pub fn rdiagonal(&self, k: isize) -> isize {
        (self.n as isize - self.m as isize) - k
    }

    /// Inclusive bounds check against `[tl, br]`
    pub fn contains_abs(&self, p: Point) -> bool {
        p.dominates(self.tl) && self.br.dominates(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_new_trims_prefix_and_suffix() {
        let a = chars("abXcd");
        let b = chars("abYYcd");
        let area = Area::new(&a, &b);

        assert_eq!(area.tl(), Point::new(2, 2));
        assert_eq!(area.br(), Point::new(3, 4));
        assert_eq!(area.n(), 1);
        assert_eq!(area.m(), 2);
    }

    #[test]
    fn test_identical_sequences_trim_to_nothing() {
        let a = chars("same");
        let area = Area::new(&a, &a);

        assert!(area.is_empty());
        assert_eq!(area.tl(), area.br());
    }

    #[test]
    fn test_trim_stops_at_shorter_side() {
        let a = chars("aaa");
        let b = chars("aaaaa");
        let area = Area::new(&a, &b);

        assert_eq!(area.n(), 0);
        assert_eq!(area.m(), 2);
        assert_eq!(area.tl(), Point::new(3, 3));
    }

    #[test]
    fn test_trim_is_idempotent() {
        let a = chars("xabcy");
        let b = chars("xazcy");
        let area = Area::new(&a, &b);
        let again = area.sub(area.tl(), area.br());

        assert_eq!(again.tl(), area.tl());
        assert_eq!(again.br(), area.br());
        assert_eq!((again.n(), again.m()), (area.n(), area.m()));
    }

    #[test]
    fn test_sub_area_is_trimmed() {
        let a = chars("abcd");
        let b = chars("abed");
        let area = Area::new(&a, &b);
        let sub = area.sub(Point::new(2, 2), Point::new(3, 3));

        assert_eq!(sub.n(), 1);
        assert_eq!(sub.m(), 1);

        let a = chars("xabcy");
        let b = chars("zabcw");
        let outer = Area::new(&a, &b);
        let inner = outer.sub(Point::new(1, 1), Point::new(4, 4));
        assert!(inner.is_empty());
        assert_eq!(inner.tl(), Point::new(4, 4));
    }

    #[test]
    #[should_panic(expected = "outside of")]
    fn test_sub_outside_parent_panics() {
        let a = chars("axb");
        let b = chars("ayb");
        let area = Area::new(&a, &b);
        area.sub(Point::new(0, 0), Point::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "inverted")]
    fn test_sub_with_inverted_corners_panics() {
        let a = chars("xabcy");
        let b = chars("zabcw");
        let area = Area::new(&a, &b);
        area.sub(Point::new(3, 1), Point::new(2, 4));
    }

    #[test]
    fn test_forward_and_backward_indexing() {
        let a = chars("zPQRz");
        let b = chars("zSTz");
        let area = Area::new(&a, &b);

        assert_eq!(*area.a(0), 'P');
        assert_eq!(*area.a(2), 'R');
        assert_eq!(*area.b(1), 'T');
        assert_eq!(*area.ra(0), 'R');
        assert_eq!(*area.rb(0), 'T');
        assert_eq!(*area.rb(1), 'S');
    }

    #[test]
    fn test_point_translation() {
        let a = chars("zPQRz");
        let b = chars("zSTz");
        let area = Area::new(&a, &b);

        assert_eq!(area.abs_point(Point::new(1, 1)), Point::new(2, 2));
        assert_eq!(area.abs_point_r(Point::new(0, 0)), area.br());
        assert_eq!(area.abs_point_r(Point::new(3, 2)), area.tl());
        assert_eq!(area.rdiagonal(0), 1);
        assert_eq!(area.rdiagonal(1), 0);
    }

    #[test]
    fn test_contains_abs_is_inclusive() {
        let a = chars("xy");
        let b = chars("uvw");
        let area = Area::new(&a, &b);

        assert!(area.contains_abs(Point::new(0, 0)));
        assert!(area.contains_abs(Point::new(2, 3)));
        assert!(!area.contains_abs(Point::new(3, 0)));
        assert!(!area.contains_abs(Point::new(0, 4)));
    }
}
