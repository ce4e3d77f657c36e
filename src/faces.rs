//! Structural queries over a diagram: adjacency, friend/forth resolution,
//! face tracing, and edge classification.
//!
//! A face is a 2-cell of the diagram's planar embedding, discovered on demand
//! as a closed walk over signed edge labels. The walk machinery here seeds
//! every move precondition and the move-menu enumerators.
//!
//! # Citations
//! - Adams, "The Knot Book", Section 2.2 (1994) – regions of a projection
//! - Kauffman, "Knots and Physics", Part I (1991) – diagram combinatorics

use crate::diagram::{Diagram, DiagramError, Edge, SignedEdge};

/// A face: the cyclic sequence of signed edge labels bounding one region.
///
/// An entry is negative when the walk traverses that edge against its
/// defined orientation.
pub type Face = Vec<SignedEdge>;

impl Diagram {
    /// Indices of the crossings containing `edge`.
    ///
    /// Length 2 for an ordinary edge; length 1 when both occurrences sit in
    /// the same crossing (a kink's self-loop).
    pub fn crossings_with_edge(&self, edge: Edge) -> Vec<usize> {
        self.crossings()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(edge))
            .map(|(i, _)| i)
            .collect()
    }

    /// Every `(crossing index, slot index)` position holding `edge`.
    ///
    /// A well-formed diagram yields exactly two positions, which may share
    /// their crossing index.
    pub(crate) fn occurrences(&self, edge: Edge) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(2);
        for (ci, crossing) in self.crossings().iter().enumerate() {
            for (si, &label) in crossing.0.iter().enumerate() {
                if label == edge {
                    positions.push((ci, si));
                }
            }
        }
        positions
    }

    /// The position of the *other* occurrence of the label at `(ci, si)`.
    ///
    /// Say two crossings read `(_, _, _, 2)` and `(_, _, 2, _)`: the label 2
    /// occupies positions `(0, 3)` and `(1, 2)`, so each is the other's
    /// friend. For a kink both positions share the crossing and only the
    /// slot differs.
    pub fn friend_index(&self, ci: usize, si: usize) -> Result<(usize, usize), DiagramError> {
        let edge = self.crossings()[ci].slot(si);
        let positions = self.occurrences(edge);
        if positions.len() != 2 {
            return Err(DiagramError::BadMultiplicity { edge, count: positions.len() });
        }
        if positions[0] == (ci, si) {
            Ok(positions[1])
        } else {
            Ok(positions[0])
        }
    }

    /// The slot at which `edge` points into a crossing: the seed of both
    /// face walks.
    ///
    /// Never resolves to slot 2, which by convention faces away from its
    /// crossing. Failure means the diagram is malformed.
    pub fn forth_index(&self, edge: Edge) -> Result<(usize, usize), DiagramError> {
        for (ci, crossing) in self.crossings().iter().enumerate() {
            if crossing.slot(0) == edge {
                return Ok((ci, 0));
            }
            if crossing.slot(1) == edge && crossing.slot(3) == self.next_edge(edge) {
                return Ok((ci, 1));
            }
            if crossing.slot(3) == edge && crossing.slot(1) == self.next_edge(edge) {
                return Ok((ci, 3));
            }
        }
        Err(DiagramError::Untraceable { edge })
    }

    /// Whether the slot `(ci, si)` faces its crossing.
    ///
    /// Slot 0 always faces; slot 1 faces iff the slot-3 label is the cyclic
    /// successor of the slot-1 label; slot 3 is symmetric; slot 2 never
    /// faces.
    pub fn is_facing(&self, ci: usize, si: usize) -> bool {
        let crossing = &self.crossings()[ci];
        match si % 4 {
            0 => true,
            1 => crossing.slot(3) == self.next_edge(crossing.slot(1)),
            3 => crossing.slot(1) == self.next_edge(crossing.slot(3)),
            _ => false,
        }
    }

    /// Walks one face from the forth index of `edge`, stepping each slot
    /// index by `step` (−1 for the ccw face, +1 for the cw face).
    fn trace_face(&self, edge: Edge, step: i64) -> Result<Face, DiagramError> {
        let mut face: Face = vec![edge];
        let (mut ci, mut si) = self.forth_index(edge)?;
        si = (si as i64 + step).rem_euclid(4) as usize;

        // Each step consumes one of the 4C slot transitions; the walk is a
        // permutation cycle, so exceeding that bound means a broken diagram.
        let bound = 4 * self.crossing_count();
        let mut steps = 0;
        while self.crossings()[ci].slot(si) != edge {
            steps += 1;
            if steps > bound {
                return Err(DiagramError::UnclosedFace { edge });
            }
            let label = self.crossings()[ci].slot(si);
            let sign = if self.is_facing(ci, si) { -1 } else { 1 };
            face.push(sign * label);
            let (fci, fsi) = self.friend_index(ci, si)?;
            ci = fci;
            si = (fsi as i64 + step).rem_euclid(4) as usize;
        }
        Ok(face)
    }

    /// The two faces adjacent to `edge`, traced in the direction the edge
    /// points: `(ccw, cw)`.
    pub fn adjacent_faces(&self, edge: Edge) -> Result<(Face, Face), DiagramError> {
        Ok((self.trace_face(edge, -1)?, self.trace_face(edge, 1)?))
    }

    /// Whether `edge` crosses over at both of its crossings (both
    /// occurrences in over slots 1/3).
    pub fn is_open(&self, edge: Edge) -> bool {
        let positions = self.occurrences(edge);
        positions.len() == 2 && positions.iter().all(|&(_, si)| si % 2 == 1)
    }

    /// Whether `edge` crosses under at both of its crossings (both
    /// occurrences in under slots 0/2).
    pub fn is_closed(&self, edge: Edge) -> bool {
        let positions = self.occurrences(edge);
        positions.len() == 2 && positions.iter().all(|&(_, si)| si % 2 == 0)
    }

    /// Whether `edge` crosses over at one crossing and under at the other.
    pub fn is_half_open(&self, edge: Edge) -> bool {
        !self.is_open(edge) && !self.is_closed(edge)
    }
}
