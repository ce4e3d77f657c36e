//! Reidemeister II: poking one strand underneath another, and the inverse.

use crate::diagram::{Crossing, Diagram, Edge};
use crate::moves::MoveError;

fn pd(code: &[[Edge; 4]]) -> Diagram {
    code.iter().map(|&[a, b, c, d]| Crossing::new(a, b, c, d)).collect()
}

/// Relabels a diagram to open the two two-label gaps a poke consumes.
///
/// Three bands: labels below the lower edge stay put, labels from the lower
/// edge up to the higher one move by two, labels at or beyond the higher
/// edge move by four. Each poked edge itself splits across its band
/// boundary: the side joined to its predecessor keeps the lower value. A
/// poked edge sitting on a kink defeats that predecessor test, so the move
/// is rejected there.
fn prepare(diagram: &Diagram, lower: Edge, higher: Edge) -> Result<Vec<Crossing>, MoveError> {
    diagram
        .crossings()
        .iter()
        .map(|crossing| {
            if crossing.count(lower) == 2 {
                return Err(MoveError::EdgeOnKink { edge: lower });
            }
            if crossing.count(higher) == 2 {
                return Err(MoveError::EdgeOnKink { edge: higher });
            }
            Ok(crossing.map(|e| {
                let keep = e < lower || (e == lower && crossing.contains(diagram.prev_edge(e)));
                let by_two = e == lower
                    || (lower < e && e < higher)
                    || (e == higher && crossing.contains(diagram.prev_edge(e)));
                if keep {
                    e
                } else if by_two {
                    e + 2
                } else {
                    e + 4
                }
            }))
        })
        .collect()
}

/// Pokes `under` underneath `over`, adding two crossings.
///
/// The two edges must lie on a common face, read off the faces traced from
/// the smaller of the two. The four label patterns for the new crossings
/// are selected by which face holds the higher edge and with which sign,
/// and by whether the under-strand carries the lower label. The
/// one-crossing self-loop diagrams are handled as fixed special cases: with
/// a single crossing the general band map has nothing to anchor to.
pub fn poke(diagram: &Diagram, under: Edge, over: Edge) -> Result<Diagram, MoveError> {
    if under == over {
        return Err(MoveError::PokeSelf { edge: under });
    }

    // Both one-crossing kink classes, by fixed literal output.
    if diagram.equals(&pd(&[[1, 2, 2, 1]])) {
        return Ok(if under == 1 && over == 2 {
            pd(&[[1, 4, 2, 5], [2, 6, 3, 5], [3, 6, 4, 1]])
        } else {
            pd(&[[4, 2, 5, 1], [5, 2, 6, 3], [3, 6, 4, 1]])
        });
    } else if diagram.equals(&pd(&[[2, 2, 1, 1]])) {
        return Ok(if under == 1 && over == 2 {
            pd(&[[1, 4, 2, 5], [2, 6, 3, 5], [6, 4, 1, 3]])
        } else {
            pd(&[[4, 2, 5, 1], [5, 2, 6, 3], [6, 4, 1, 3]])
        });
    }

    let lower = under.min(over);
    let higher = under.max(over);
    let (face_ccw, face_cw) = diagram.adjacent_faces(lower)?;

    if !(face_cw.contains(&higher)
        || face_cw.contains(&-higher)
        || face_ccw.contains(&higher)
        || face_ccw.contains(&-higher))
    {
        return Err(MoveError::PokeNotCofacial { under, over });
    }

    let mut code = prepare(diagram, lower, higher)?;

    let under_is_lower = under == lower;
    let (first, second) = if face_cw.contains(&-higher) {
        if under_is_lower {
            (
                Crossing::new(lower, higher + 2, lower + 1, higher + 3),
                Crossing::new(lower + 1, higher + 4, lower + 2, higher + 3),
            )
        } else {
            (
                Crossing::new(higher + 2, lower + 1, higher + 3, lower),
                Crossing::new(higher + 3, lower + 1, higher + 4, lower + 2),
            )
        }
    } else if face_ccw.contains(&-higher) {
        if under_is_lower {
            (
                Crossing::new(lower, higher + 3, lower + 1, higher + 2),
                Crossing::new(lower + 1, higher + 3, lower + 2, higher + 4),
            )
        } else {
            (
                Crossing::new(higher + 2, lower, higher + 3, lower + 1),
                Crossing::new(higher + 3, lower + 2, higher + 4, lower + 1),
            )
        }
    } else if face_cw.contains(&higher) {
        if under_is_lower {
            (
                Crossing::new(lower, higher + 4, lower + 1, higher + 3),
                Crossing::new(lower + 1, higher + 2, lower + 2, higher + 3),
            )
        } else {
            (
                Crossing::new(higher + 2, lower + 1, higher + 3, lower + 2),
                Crossing::new(higher + 3, lower + 1, higher + 4, lower),
            )
        }
    } else {
        if under_is_lower {
            (
                Crossing::new(lower, higher + 3, lower + 1, higher + 4),
                Crossing::new(lower + 1, higher + 3, lower + 2, higher + 2),
            )
        } else {
            (
                Crossing::new(higher + 2, lower + 2, higher + 3, lower + 1),
                Crossing::new(higher + 3, lower, higher + 4, lower + 1),
            )
        }
    };
    code.push(first);
    code.push(second);
    Ok(Diagram::new(code))
}

/// Removes the bigon bounded by `edge1` and `edge2`, deleting its two
/// crossings.
///
/// The edges must co-occur in exactly two crossings. Surviving labels band
/// down: by four above the higher edge, by two from the lower edge up.
pub fn unpoke(diagram: &Diagram, edge1: Edge, edge2: Edge) -> Result<Diagram, MoveError> {
    let mut kept = Vec::with_capacity(diagram.crossing_count());
    let mut deleted = 0;
    for crossing in diagram.crossings() {
        if crossing.contains(edge1) && crossing.contains(edge2) {
            deleted += 1;
        } else {
            kept.push(*crossing);
        }
    }
    if deleted != 2 {
        return Err(MoveError::NotOnPoke { edge1, edge2 });
    }
    let lower = edge1.min(edge2);
    let higher = edge1.max(edge2);
    let code = kept
        .iter()
        .map(|c| {
            c.map(|e| {
                if e > higher {
                    e - 4
                } else if e < lower {
                    e
                } else {
                    e - 2
                }
            })
        })
        .collect();
    Ok(Diagram::new(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trefoil() -> Diagram {
        pd(&[[2, 5, 3, 6], [4, 1, 5, 2], [6, 3, 1, 4]])
    }

    fn star() -> Diagram {
        pd(&[[2, 7, 3, 8], [3, 9, 4, 8], [4, 9, 5, 10], [6, 1, 7, 2], [10, 5, 1, 6]])
    }

    #[test]
    fn every_trefoil_poke_yields_the_star() {
        for (under, over) in [(1, 4), (4, 1), (2, 5), (5, 2), (3, 6), (6, 3)] {
            let got = poke(&trefoil(), under, over).unwrap();
            assert!(got.identical(&star()), "poke({under}, {over}) gave {got}");
            assert!(got.is_valid());
        }
    }

    #[test]
    fn poke_two_five_is_the_star_exactly() {
        // This argument order writes the star's crossings literally.
        let got = poke(&trefoil(), 2, 5).unwrap();
        let mut crossings = got.crossings().to_vec();
        crossings.sort_unstable();
        let mut want = star().crossings().to_vec();
        want.sort_unstable();
        assert_eq!(crossings, want);
    }

    #[test]
    fn infinity_unknot_pokes() {
        let got = poke(&pd(&[[1, 2, 2, 1]]), 1, 2).unwrap();
        assert!(got.identical(&pd(&[[1, 4, 2, 5], [2, 6, 3, 5], [3, 6, 4, 1]])));

        let got = poke(&pd(&[[1, 1, 2, 2]]), 2, 1).unwrap();
        assert!(got.identical(&pd(&[[4, 2, 5, 1], [5, 2, 6, 3], [6, 4, 1, 3]])));
    }

    #[test]
    fn poke_rejects_an_edge_under_itself() {
        assert_eq!(poke(&trefoil(), 3, 3), Err(MoveError::PokeSelf { edge: 3 }));
    }

    #[test]
    fn poke_rejects_edges_on_different_faces() {
        // Edges 1 and 2 of the trefoil never share a face.
        assert_eq!(
            poke(&trefoil(), 1, 2),
            Err(MoveError::PokeNotCofacial { under: 1, over: 2 })
        );
    }

    #[test]
    fn unpoke_undoes_a_poke() {
        // poke(2, 5) splits edge 2 into 2..4 and edge 5 into 7..9; the two
        // new crossings share the fresh labels 3 and 8.
        let poked = poke(&trefoil(), 2, 5).unwrap();
        let back = unpoke(&poked, 3, 8).unwrap();
        assert!(back.identical(&trefoil()));
    }

    #[test]
    fn unpoke_rejects_non_bigon_pairs() {
        // Edges 1 and 2 meet in only one crossing.
        assert_eq!(
            unpoke(&trefoil(), 1, 2),
            Err(MoveError::NotOnPoke { edge1: 1, edge2: 2 })
        );
    }

    #[test]
    fn poked_diagrams_stay_valid() {
        let d = trefoil();
        for (under, over) in [(1, 4), (2, 6), (5, 3)] {
            if let Ok(poked) = poke(&d, under, over) {
                assert!(poked.is_valid(), "poke({under}, {over}) broke the labeling");
            }
        }
    }
}
