//! Legal-move enumeration.
//!
//! Each enumerator lists every application of one move family that the
//! current diagram admits, combining face tracing with the open/closed
//! layering predicates. These menus are the interface consumed by external
//! search drivers; the core never picks a move itself.

use crate::diagram::{Diagram, DiagramError, Edge};

/// Whether removing the bigon between the two edges is a legal Reidemeister
/// II: one edge over at both ends, the other under at both.
pub fn is_unpokable(diagram: &Diagram, edge1: Edge, edge2: Edge) -> bool {
    (diagram.is_open(edge1) && diagram.is_closed(edge2))
        || (diagram.is_open(edge2) && diagram.is_closed(edge1))
}

/// Whether the three edges are layered for a Reidemeister III: in some
/// order one open, one closed, one half-open.
pub fn is_slidable(diagram: &Diagram, edge1: Edge, edge2: Edge, edge3: Edge) -> bool {
    let edges = [edge1, edge2, edge3];
    let perms = [(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)];
    perms.iter().any(|&(a, b, c)| {
        diagram.is_open(edges[a]) && diagram.is_closed(edges[b]) && diagram.is_half_open(edges[c])
    })
}

/// Every edge that can be twisted, which is every edge.
pub fn twistables(diagram: &Diagram) -> Vec<Edge> {
    diagram.edges().collect()
}

/// Every edge whose kink can be untwisted: the repeated label of each
/// crossing holding exactly three distinct labels.
pub fn untwistables(diagram: &Diagram) -> Vec<Edge> {
    diagram
        .crossings()
        .iter()
        .filter_map(|crossing| {
            let mut labels = crossing.0.to_vec();
            labels.sort_unstable();
            labels.dedup();
            if labels.len() == 3 {
                labels.into_iter().find(|&e| crossing.count(e) == 2)
            } else {
                None
            }
        })
        .collect()
}

/// Every ordered pair `(edge, other)` that can be poked: the other edge
/// appears, with either sign, on one of the faces adjacent to the first.
pub fn pokables(diagram: &Diagram) -> Result<Vec<(Edge, Edge)>, DiagramError> {
    let mut pairs = Vec::new();
    for edge in diagram.edges() {
        let (face_ccw, face_cw) = diagram.adjacent_faces(edge)?;
        let mut partners: Vec<Edge> = Vec::new();
        for &signed in face_ccw.iter().chain(face_cw.iter()) {
            let adjacent = signed.abs();
            if adjacent != edge && !partners.contains(&adjacent) {
                partners.push(adjacent);
            }
        }
        pairs.extend(partners.into_iter().map(|other| (edge, other)));
    }
    Ok(pairs)
}

/// Every unordered pair of edges bounding a removable bigon.
pub fn unpokables(diagram: &Diagram) -> Result<Vec<(Edge, Edge)>, DiagramError> {
    let mut pairs: Vec<(Edge, Edge)> = Vec::new();
    for edge in diagram.edges() {
        if pairs.iter().any(|&(a, b)| a == edge || b == edge) {
            continue;
        }
        let faces = diagram.adjacent_faces(edge)?;
        for face in [&faces.0, &faces.1] {
            if face.len() == 2 {
                let (a, b) = (face[0].abs(), face[1].abs());
                if is_unpokable(diagram, a, b) {
                    let pair = (a.min(b), a.max(b));
                    if !pairs.contains(&pair) {
                        pairs.push(pair);
                    }
                }
            }
        }
    }
    Ok(pairs)
}

/// Every unordered triple of edges bounding a slidable triangle.
pub fn slidables(diagram: &Diagram) -> Result<Vec<(Edge, Edge, Edge)>, DiagramError> {
    let mut triples: Vec<(Edge, Edge, Edge)> = Vec::new();
    for edge in diagram.edges() {
        if triples.iter().any(|&(a, b, c)| a == edge || b == edge || c == edge) {
            continue;
        }
        let faces = diagram.adjacent_faces(edge)?;
        for face in [&faces.0, &faces.1] {
            if face.len() == 3 {
                let mut labels = [face[0].abs(), face[1].abs(), face[2].abs()];
                labels.sort_unstable();
                let triple = (labels[0], labels[1], labels[2]);
                if is_slidable(diagram, triple.0, triple.1, triple.2) && !triples.contains(&triple) {
                    triples.push(triple);
                }
            }
        }
    }
    Ok(triples)
}
