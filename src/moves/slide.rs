//! Reidemeister III: sliding a strand across a triangular face.

use crate::diagram::{Crossing, Diagram, Edge};
use crate::faces::Face;
use crate::moves::menu::is_slidable;
use crate::moves::MoveError;

/// Slides a strand over the triangle bounded by the three edges.
///
/// The edges must lie together, unsigned, on one traced face of length
/// three, layered so that exactly one is over at both ends, one under at
/// both, and one mixed. No crossing is added or removed: each touched
/// crossing is rewritten by the two-slots-ahead rule, reading through the
/// friend crossing for the three face edges and through the same crossing
/// for every other slot.
pub fn slide(diagram: &Diagram, edge1: Edge, edge2: Edge, edge3: Edge) -> Result<Diagram, MoveError> {
    let edges = [edge1, edge2, edge3];

    let on_face = |face: &Face| {
        face.len() == 3 && edges.iter().all(|&e| face.contains(&e) || face.contains(&-e))
    };
    let (face_ccw, face_cw) = diagram.adjacent_faces(edge1)?;
    if !(on_face(&face_ccw) || on_face(&face_cw)) {
        return Err(MoveError::SlideNotCofacial { edges });
    }

    if !is_slidable(diagram, edge1, edge2, edge3) {
        return Err(MoveError::SlideBadLayering { edges });
    }

    let mut code = Vec::with_capacity(diagram.crossing_count());
    for (ci, crossing) in diagram.crossings().iter().enumerate() {
        if !edges.iter().any(|&e| crossing.contains(e)) {
            code.push(*crossing);
            continue;
        }
        let mut slots = [0; 4];
        for (si, slot) in slots.iter_mut().enumerate() {
            let label = crossing.slot(si);
            if edges.contains(&label) {
                let (fci, fsi) = diagram.friend_index(ci, si)?;
                *slot = diagram.crossings()[fci].slot((fsi + 2) % 4);
            } else {
                *slot = crossing.slot((si + 2) % 4);
            }
        }
        code.push(Crossing(slots));
    }
    Ok(Diagram::new(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pd(code: &[[Edge; 4]]) -> Diagram {
        code.iter().map(|&[a, b, c, d]| Crossing::new(a, b, c, d)).collect()
    }

    fn trefoil() -> Diagram {
        pd(&[[2, 5, 3, 6], [4, 1, 5, 2], [6, 3, 1, 4]])
    }

    #[test]
    fn fake_trefoil_slide() {
        let fake_trefoil = pd(&[[4, 1, 5, 2], [5, 3, 6, 2], [6, 3, 1, 4]]);
        let target = pd(&[[3, 2, 4, 3], [5, 4, 6, 5], [6, 2, 1, 1]]);
        let got = slide(&fake_trefoil, 2, 4, 6).unwrap();
        assert!(got.identical(&target), "got {got}");
    }

    #[test]
    fn six_crossing_unknot_slide() {
        let unknot1 = pd(&[
            [8, 1, 9, 2],
            [2, 9, 3, 10],
            [3, 11, 4, 10],
            [7, 5, 8, 4],
            [12, 6, 1, 5],
            [6, 12, 7, 11],
        ]);
        let target = pd(&[
            [8, 1, 9, 2],
            [2, 9, 3, 10],
            [3, 11, 4, 10],
            [11, 5, 12, 4],
            [6, 6, 7, 5],
            [7, 1, 8, 12],
        ]);
        let got = slide(&unknot1, 5, 7, 12).unwrap();
        assert!(got.identical(&target), "got {got}");
    }

    #[test]
    fn second_six_crossing_unknot_slide() {
        let unknot2 = pd(&[
            [2, 11, 3, 12],
            [3, 8, 4, 9],
            [4, 10, 5, 9],
            [5, 1, 6, 12],
            [6, 1, 7, 2],
            [7, 10, 8, 11],
        ]);
        let target = pd(&[
            [1, 10, 2, 11],
            [3, 8, 4, 9],
            [4, 10, 5, 9],
            [5, 1, 6, 12],
            [6, 11, 7, 12],
            [7, 2, 8, 3],
        ]);
        let got = slide(&unknot2, 2, 7, 11).unwrap();
        assert!(got.identical(&target), "got {got}");
    }

    #[test]
    fn slide_preserves_crossing_count_and_validity() {
        let fake_trefoil = pd(&[[4, 1, 5, 2], [5, 3, 6, 2], [6, 3, 1, 4]]);
        let slid = slide(&fake_trefoil, 2, 4, 6).unwrap();
        assert_eq!(slid.crossing_count(), fake_trefoil.crossing_count());
        assert!(slid.is_valid());
    }

    #[test]
    fn slide_rejects_a_non_triangle() {
        assert_eq!(
            slide(&trefoil(), 1, 2, 4),
            Err(MoveError::SlideNotCofacial { edges: [1, 2, 4] })
        );
    }

    #[test]
    fn slide_rejects_bad_layering() {
        // Edges 2, 4, 6 bound a trefoil face, but the alternating diagram
        // leaves all three mixed.
        assert_eq!(
            slide(&trefoil(), 2, 4, 6),
            Err(MoveError::SlideBadLayering { edges: [2, 4, 6] })
        );
    }
}
