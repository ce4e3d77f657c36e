//! Relabeling and equality up to relabeling.
//!
//! Two PD codes describe the same diagram whenever one is a cyclic relabeling
//! of the other with its crossings listed in a different order. `shift` is
//! the relabeling group action; `equals` quotients by it; `is_congruent`
//! additionally quotients by strand-direction reversal.
//!
//! # Citations
//! - Kauffman, "Knots and Physics", Part I (1991) – diagram equivalence
//! - Burde & Zieschang, "Knots", Chapter 1 (2003) – orientation and mirrors

use crate::diagram::{Crossing, Diagram};

impl Crossing {
    /// The lexicographically smallest cyclic rotation of the slot sequence.
    ///
    /// Two codes for one diagram may write a crossing starting from
    /// different slots; comparing canonical rotations makes `identical`
    /// insensitive to that choice.
    pub(crate) fn canonical(&self) -> Crossing {
        let mut best = *self;
        for r in 1..4 {
            let rotated = Crossing([
                self.0[r % 4],
                self.0[(r + 1) % 4],
                self.0[(r + 2) % 4],
                self.0[(r + 3) % 4],
            ]);
            if rotated.0 < best.0 {
                best = rotated;
            }
        }
        best
    }
}

impl Diagram {
    /// Relabels every edge `e → ((e + n − 1) mod 2E) + 1`.
    ///
    /// A cyclic group action of order `2E`: `shift(n)` followed by
    /// `shift(2E − n)` is the identity.
    pub fn shift(&self, n: i64) -> Diagram {
        self.crossings()
            .iter()
            .map(|c| c.map(|e| self.shift_edge(e, n)))
            .collect()
    }

    /// Whether `self` and `other` hold the same crossings, regardless of
    /// sequence order and of the slot each crossing's code starts from.
    pub fn identical(&self, other: &Diagram) -> bool {
        if self.crossing_count() != other.crossing_count() {
            return false;
        }
        let mut left: Vec<Crossing> = self.crossings().iter().map(Crossing::canonical).collect();
        let mut right: Vec<Crossing> = other.crossings().iter().map(Crossing::canonical).collect();
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }

    /// Orientation-sensitive equality: the raw sequences match, or some
    /// cyclic relabeling of `self` is identical to `other`.
    pub fn equals(&self, other: &Diagram) -> bool {
        if self.crossings() == other.crossings() {
            return true;
        }
        (0..self.edge_count()).any(|n| self.shift(n).identical(other))
    }

    /// Orientation-insensitive equality: equal as-is or after reversing
    /// strand direction.
    pub fn is_congruent(&self, other: &Diagram) -> bool {
        self.equals(other) || self.reverse().equals(other)
    }

    /// Reverses strand direction: `(a, b, c, d) → (d, c, b, a)`.
    pub fn reverse(&self) -> Diagram {
        self.crossings()
            .iter()
            .map(|c| {
                let [a, b, cc, d] = c.0;
                Crossing::new(d, cc, b, a)
            })
            .collect()
    }

    /// Mirrors the diagram, swapping over/under roles:
    /// `(a, b, c, d) → (a, d, c, b)`.
    pub fn reflect(&self) -> Diagram {
        self.crossings()
            .iter()
            .map(|c| {
                let [a, b, cc, d] = c.0;
                Crossing::new(a, d, cc, b)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Crossing;

    fn trefoil() -> Diagram {
        Diagram::new(vec![
            Crossing::new(2, 5, 3, 6),
            Crossing::new(4, 1, 5, 2),
            Crossing::new(6, 3, 1, 4),
        ])
    }

    #[test]
    fn shift_is_a_group_action_of_order_two_e() {
        let d = trefoil();
        let m = d.edge_count();
        for n in 0..m {
            assert!(d.shift(n).shift(m - n).identical(&d), "shift({n}) not undone");
        }
        assert!(d.shift(m).identical(&d));
    }

    #[test]
    fn identical_ignores_crossing_order() {
        let d = trefoil();
        let reordered = Diagram::new(vec![
            Crossing::new(6, 3, 1, 4),
            Crossing::new(2, 5, 3, 6),
            Crossing::new(4, 1, 5, 2),
        ]);
        assert!(d.identical(&reordered));
        assert!(reordered.identical(&d));
    }

    #[test]
    fn equals_quotients_by_shift() {
        let d = trefoil();
        assert!(d.equals(&d.shift(2)));
        assert!(d.shift(5).equals(&d));
    }

    #[test]
    fn equals_distinguishes_different_diagrams() {
        let d = trefoil();
        let kink = Diagram::new(vec![Crossing::new(1, 1, 2, 2)]);
        assert!(!d.equals(&kink));
        assert!(!d.identical(&d.reflect()));
    }

    #[test]
    fn canonical_rotation_normalizes_start_slot() {
        let a = Crossing::new(8, 3, 9, 4);
        let b = Crossing::new(3, 9, 4, 8);
        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(a.canonical(), Crossing::new(3, 9, 4, 8));
    }

    #[test]
    fn one_crossing_kinks_are_one_class() {
        let kinks = [
            Diagram::new(vec![Crossing::new(1, 1, 2, 2)]),
            Diagram::new(vec![Crossing::new(2, 2, 1, 1)]),
            Diagram::new(vec![Crossing::new(1, 2, 2, 1)]),
            Diagram::new(vec![Crossing::new(2, 1, 1, 2)]),
        ];
        for other in &kinks[1..] {
            assert!(kinks[0].equals(other));
        }
    }

    #[test]
    fn congruence_sees_through_reversal() {
        let d = trefoil();
        assert!(d.reverse().is_congruent(&d));
        assert!(d.is_congruent(&d.reverse()));
    }

    #[test]
    fn reflect_is_an_involution() {
        let d = trefoil();
        assert!(d.reflect().reflect().identical(&d));
    }

    #[test]
    fn empty_diagrams_are_equal() {
        assert!(Diagram::unknot().equals(&Diagram::unknot()));
        assert!(Diagram::unknot().identical(&Diagram::unknot()));
    }
}
