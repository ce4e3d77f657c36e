//! Reidemeister I: adding and removing a kink.

use crate::diagram::{Crossing, Diagram, Edge};
use crate::moves::MoveError;

/// Orientation of an inserted kink.
///
/// Sign is the crossing sense of the new kink; handedness is the side of the
/// strand the loop is thrown over. `PositiveRight`/`NegativeRight` are the
/// two variants the invariant layer treats as the positive and negative
/// twist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twist {
    /// Loop on the left, positive sense: appends `(e, e+2, e+1, e+1)`.
    PositiveLeft,
    /// Loop on the left, negative sense: appends `(e+1, e, e+2, e+1)`.
    NegativeLeft,
    /// Loop on the right, positive sense: appends `(e+1, e+1, e+2, e)`.
    PositiveRight,
    /// Loop on the right, negative sense: appends `(e, e+1, e+1, e+2)`.
    NegativeRight,
}

impl Twist {
    fn kink(self, e: Edge) -> Crossing {
        match self {
            Twist::PositiveLeft => Crossing::new(e, e + 2, e + 1, e + 1),
            Twist::NegativeLeft => Crossing::new(e + 1, e, e + 2, e + 1),
            Twist::PositiveRight => Crossing::new(e + 1, e + 1, e + 2, e),
            Twist::NegativeRight => Crossing::new(e, e + 1, e + 1, e + 2),
        }
    }
}

/// Relabels a diagram to open a two-label gap at `target`, ready for a kink
/// to be appended.
///
/// Labels below `target` keep their value; labels at or above it move up by
/// two. The target label itself stays put only on the side already joined to
/// its predecessor, which is read off the crossing holding that occurrence.
/// A crossing already holding `target` twice (an existing kink) is
/// disambiguated through its successor structure instead, since the
/// predecessor test cannot tell its two occurrences apart.
fn prepare(diagram: &Diagram, target: Edge) -> Vec<Crossing> {
    diagram
        .crossings()
        .iter()
        .map(|crossing| {
            if crossing.count(target) == 2 {
                let [a, b, c, d] = crossing.0;
                if diagram.next_edge(a) == b || diagram.next_edge(diagram.next_edge(a)) == b {
                    Crossing::new(a, b + 2, c, d + 2)
                } else {
                    Crossing::new(a + 2, b, c + 2, d)
                }
            } else {
                crossing.map(|e| {
                    if e < target || (e == target && crossing.contains(diagram.prev_edge(e))) {
                        e
                    } else {
                        e + 2
                    }
                })
            }
        })
        .collect()
}

/// Inserts a Reidemeister-I kink at `edge`.
///
/// Always legal for any existing edge. The new kink consumes labels
/// `edge..=edge+2`; every other label is banded upward around the gap.
pub fn twist(diagram: &Diagram, edge: Edge, kind: Twist) -> Result<Diagram, MoveError> {
    if edge < 1 || edge > diagram.edge_count() {
        return Err(MoveError::NoSuchEdge { edge });
    }
    let mut code = prepare(diagram, edge);
    code.push(kind.kink(edge));
    Ok(Diagram::new(code))
}

/// Removes the kink whose crossing holds `edge` twice.
///
/// Labels above `edge` shift down by two. When `edge` is 1 or `2E` the kink
/// wraps the label cycle and the straightforward band map would break the
/// invariant, so the diagram is first rotated one label forward and the
/// successor edge is untwisted instead.
pub fn untwist(diagram: &Diagram, edge: Edge) -> Result<Diagram, MoveError> {
    if diagram.is_empty() {
        return Err(MoveError::NotOnTwist { edge });
    }
    if diagram.crossing_count() == 1 {
        return if diagram.crossings()[0].count(edge) == 2 {
            Ok(Diagram::unknot())
        } else {
            Err(MoveError::NotOnTwist { edge })
        };
    }
    if edge == 1 || edge == diagram.edge_count() {
        return untwist(&diagram.shift(1), diagram.next_edge(edge));
    }
    let Some(kink_at) = diagram.crossings().iter().position(|c| c.count(edge) == 2) else {
        return Err(MoveError::NotOnTwist { edge });
    };
    let code = diagram
        .crossings()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != kink_at)
        .map(|(_, c)| c.map(|e| if e > edge { e - 2 } else { e }))
        .collect();
    Ok(Diagram::new(code))
}
