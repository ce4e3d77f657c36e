//! Core data model for planar-diagram (PD) knot codes.
//!
//! A diagram is an ordered sequence of 4-valent crossings; each crossing
//! records the labels of the four edge-ends meeting at it, in a fixed
//! rotational convention that encodes over/under information positionally.
//!
//! # Citations
//! - Kauffman, "State models and the Jones polynomial", Topology 26 (1987)
//! - Bar-Natan, "The Knot Atlas" – PD notation conventions
//! - Adams, "The Knot Book", Chapter 2 (1994) – diagrams and moves

use serde::{Deserialize, Serialize};
use std::fmt;

/// An edge label, local to its diagram.
///
/// Labels range over `1..=2E` where `E` is the crossing count; they are
/// renumbered by every move and are not stable across transformations.
pub type Edge = i64;

/// An edge label carrying a traversal sign.
///
/// Negative means the edge was walked against its defined orientation while
/// tracing a face.
pub type SignedEdge = i64;

/// A 4-valent crossing: the four edge labels meeting at one vertex.
///
/// Slot 0 is the incoming under-strand; the under-strand leaves at slot 2;
/// slots 1 and 3 carry the over-strand. A repeated label marks a
/// Reidemeister-I kink.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Crossing(pub [Edge; 4]);

impl Crossing {
    /// Creates a crossing from its four slot labels in rotational order.
    #[inline]
    pub const fn new(a: Edge, b: Edge, c: Edge, d: Edge) -> Self {
        Self([a, b, c, d])
    }

    /// Returns the label at `slot` (0..4).
    #[inline]
    pub fn slot(&self, slot: usize) -> Edge {
        self.0[slot % 4]
    }

    /// Whether `edge` occurs in any slot.
    #[inline]
    pub fn contains(&self, edge: Edge) -> bool {
        self.0.contains(&edge)
    }

    /// Number of slots holding `edge` (0, 1, or 2 in a valid diagram).
    #[inline]
    pub fn count(&self, edge: Edge) -> usize {
        self.0.iter().filter(|&&e| e == edge).count()
    }

    /// Applies `f` to every slot label, producing a new crossing.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(Edge) -> Edge) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2]), f(self.0[3])])
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

/// Error signalling a malformed diagram or a failed structural walk.
///
/// These are defect signals, not recoverable user errors: a diagram that
/// trips one violates the labeling invariant (every label in `1..=2E` occurs
/// in exactly two slots).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// A label lies outside `1..=2E`.
    LabelOutOfRange {
        /// The offending label.
        edge: Edge,
    },
    /// A label does not occur exactly twice.
    BadMultiplicity {
        /// The offending label.
        edge: Edge,
        /// How many slots actually hold it.
        count: usize,
    },
    /// No slot lets the edge point into a crossing, so face tracing cannot
    /// be seeded from it.
    Untraceable {
        /// The edge with no forth index.
        edge: Edge,
    },
    /// A face walk failed to return to its starting label within the slot
    /// count.
    UnclosedFace {
        /// The edge the walk started from.
        edge: Edge,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::LabelOutOfRange { edge } => {
                write!(f, "edge label {edge} is outside the diagram's label range")
            }
            DiagramError::BadMultiplicity { edge, count } => {
                write!(f, "edge label {edge} occurs {count} times, expected exactly 2")
            }
            DiagramError::Untraceable { edge } => {
                write!(f, "edge {edge} has no slot pointing into a crossing")
            }
            DiagramError::UnclosedFace { edge } => {
                write!(f, "face walk from edge {edge} did not close")
            }
        }
    }
}

impl std::error::Error for DiagramError {}

/// Error returned by the operations this crate deliberately does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    /// Name of the requested operation.
    pub operation: &'static str,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not supported", self.operation)
    }
}

impl std::error::Error for Unsupported {}

/// An immutable knot/link diagram in PD notation.
///
/// Every transform returns a new `Diagram`; nothing is mutated in place, so
/// values are freely shareable across threads.
///
/// # Invariant
/// A well-formed diagram has every label in `1..=2E` occurring in exactly two
/// slots (counting both slots of a kink). Construction does not enforce this;
/// [`Diagram::validate`] is the exposed sanity check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagram {
    crossings: Vec<Crossing>,
}

impl Diagram {
    /// Creates a diagram from its crossing sequence.
    #[inline]
    pub fn new(crossings: Vec<Crossing>) -> Self {
        Self { crossings }
    }

    /// The empty diagram: the 0-crossing unknot.
    #[inline]
    pub fn unknot() -> Self {
        Self { crossings: Vec::new() }
    }

    /// The crossing sequence.
    #[inline]
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Number of crossings.
    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    /// Number of edges, `2E = 2 × crossing count`.
    #[inline]
    pub fn edge_count(&self) -> i64 {
        2 * self.crossings.len() as i64
    }

    /// Whether the diagram has no crossings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }

    /// All edge labels, `1..=2E` in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        1..=self.edge_count()
    }

    /// Shifts `edge` by `n`, wrapping around the label cycle.
    ///
    /// Only meaningful on a non-empty diagram.
    #[inline]
    pub(crate) fn shift_edge(&self, edge: Edge, n: i64) -> Edge {
        let m = self.edge_count();
        (edge + n - 1).rem_euclid(m) + 1
    }

    /// The cyclic successor of `edge`.
    #[inline]
    pub(crate) fn next_edge(&self, edge: Edge) -> Edge {
        self.shift_edge(edge, 1)
    }

    /// The cyclic predecessor of `edge`.
    #[inline]
    pub(crate) fn prev_edge(&self, edge: Edge) -> Edge {
        self.shift_edge(edge, -1)
    }

    /// Checks the labeling invariant: every label in `1..=2E` occurs in
    /// exactly two slots.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let m = self.edge_count();
        for crossing in &self.crossings {
            for &edge in &crossing.0 {
                if edge < 1 || edge > m {
                    return Err(DiagramError::LabelOutOfRange { edge });
                }
            }
        }
        for edge in self.edges() {
            let count: usize = self.crossings.iter().map(|c| c.count(edge)).sum();
            if count != 2 {
                return Err(DiagramError::BadMultiplicity { edge, count });
            }
        }
        Ok(())
    }

    /// Convenience form of [`Diagram::validate`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Gauss code derivation. Not supported.
    pub fn gauss_code(&self) -> Result<Vec<i64>, Unsupported> {
        Err(Unsupported { operation: "Gauss code" })
    }

    /// Dowker–Thistlethwaite notation. Not supported.
    pub fn dt_notation(&self) -> Result<Vec<i64>, Unsupported> {
        Err(Unsupported { operation: "Dowker-Thistlethwaite notation" })
    }

    /// Disjoint union of two diagrams. Not supported.
    pub fn disjoint_union(&self, _other: &Diagram) -> Result<Diagram, Unsupported> {
        Err(Unsupported { operation: "disjoint union" })
    }

    /// Joining of two diagrams along the given edges (generalized connected
    /// sum). Not supported.
    pub fn join(
        &self,
        _other: &Diagram,
        _self_edge: Edge,
        _other_edge: Edge,
    ) -> Result<Diagram, Unsupported> {
        Err(Unsupported { operation: "join" })
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PD [ ")?;
        for (i, crossing) in self.crossings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{crossing}")?;
        }
        write!(f, " ]")
    }
}

impl FromIterator<Crossing> for Diagram {
    fn from_iter<I: IntoIterator<Item = Crossing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::infinity_unknot;

    fn trefoil() -> Diagram {
        Diagram::new(vec![
            Crossing::new(2, 5, 3, 6),
            Crossing::new(4, 1, 5, 2),
            Crossing::new(6, 3, 1, 4),
        ])
    }

    #[test]
    fn empty_diagram_is_valid() {
        let d = Diagram::unknot();
        assert!(d.is_valid());
        assert_eq!(d.crossing_count(), 0);
        assert_eq!(d.edge_count(), 0);
        assert_eq!(d.edges().count(), 0);
    }

    #[test]
    fn trefoil_is_valid() {
        assert!(trefoil().is_valid());
        assert_eq!(trefoil().edge_count(), 6);
    }

    #[test]
    fn kink_counts_both_slots() {
        // (1, 1, 2, 2): each label occupies two slots of the same crossing.
        assert!(infinity_unknot().is_valid());
    }

    #[test]
    fn bad_multiplicity_is_rejected() {
        let d = Diagram::new(vec![Crossing::new(1, 2, 3, 4), Crossing::new(1, 2, 3, 3)]);
        assert_eq!(d.validate(), Err(DiagramError::BadMultiplicity { edge: 3, count: 3 }));
    }

    #[test]
    fn out_of_range_label_is_rejected() {
        let d = Diagram::new(vec![Crossing::new(1, 2, 9, 1)]);
        assert_eq!(d.validate(), Err(DiagramError::LabelOutOfRange { edge: 9 }));
    }

    #[test]
    fn edge_arithmetic_wraps() {
        let d = trefoil();
        assert_eq!(d.next_edge(6), 1);
        assert_eq!(d.prev_edge(1), 6);
        assert_eq!(d.shift_edge(5, 3), 2);
    }

    #[test]
    fn display_matches_pd_form() {
        let d = infinity_unknot();
        assert_eq!(d.to_string(), "PD [ (1, 1, 2, 2) ]");
    }

    #[test]
    fn serde_round_trip() {
        let d = trefoil();
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn unsupported_operations_signal() {
        let d = trefoil();
        assert!(d.gauss_code().is_err());
        assert!(d.dt_notation().is_err());
        assert!(d.disjoint_union(&d.clone()).is_err());
        assert!(d.join(&d.clone(), 1, 1).is_err());
        assert_eq!(d.gauss_code().unwrap_err().to_string(), "Gauss code is not supported");
    }
}
