//! The Reidemeister move engine.
//!
//! Each move is a pure function from a diagram to a new diagram: nothing is
//! mutated, and every precondition failure surfaces as a [`MoveError`]
//! carrying the move name and the offending edges. The caller decides
//! whether to retry with different edges; no retries happen here.
//!
//! The hard part of every move is its relabeling algebra: inserting or
//! removing crossings changes `2E`, so every surviving label is pushed
//! through a piecewise band map chosen by local adjacency, keeping the
//! labeling invariant intact.
//!
//! # Citations
//! - Reidemeister, "Elementare Begründung der Knotentheorie" (1927)
//! - Adams, "The Knot Book", Section 1.3 (1994) – the three moves

mod menu;
mod poke;
mod slide;
mod twist;

pub use menu::{is_slidable, is_unpokable, pokables, slidables, twistables, unpokables, untwistables};
pub use poke::{poke, unpoke};
pub use slide::slide;
pub use twist::{twist, untwist, Twist};

use crate::diagram::{DiagramError, Edge};
use std::fmt;

/// Precondition violation raised by a Reidemeister move.
///
/// One distinguished kind for all five moves; the variant records which
/// documented precondition failed and on which edges. The `Malformed`
/// variant propagates a structural defect discovered mid-move (a face walk
/// that cannot close), which signals a broken input diagram rather than a
/// wrong move choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// `twist`: the target edge does not exist in the diagram.
    NoSuchEdge {
        /// The requested edge.
        edge: Edge,
    },
    /// `untwist`: no crossing holds the edge twice.
    NotOnTwist {
        /// The requested edge.
        edge: Edge,
    },
    /// `poke`: an edge cannot be poked underneath itself.
    PokeSelf {
        /// The edge given as both under and over.
        edge: Edge,
    },
    /// `poke`: the two edges do not lie on a common face.
    PokeNotCofacial {
        /// The strand to be pushed under.
        under: Edge,
        /// The strand to be pushed over.
        over: Edge,
    },
    /// `poke`: a poked edge lies on a kink, where the band map is undefined.
    EdgeOnKink {
        /// The kinked edge.
        edge: Edge,
    },
    /// `unpoke`: the two edges do not co-occur in exactly two crossings.
    NotOnPoke {
        /// First edge of the claimed bigon.
        edge1: Edge,
        /// Second edge of the claimed bigon.
        edge2: Edge,
    },
    /// `slide`: the three edges do not bound a triangular face.
    SlideNotCofacial {
        /// The three requested edges.
        edges: [Edge; 3],
    },
    /// `slide`: the three edges are not layered as one over, one under, and
    /// one mixed strand.
    SlideBadLayering {
        /// The three requested edges.
        edges: [Edge; 3],
    },
    /// The diagram itself is malformed; no move applies.
    Malformed(DiagramError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSuchEdge { edge } => {
                write!(f, "twist: edge {edge} does not exist in the diagram")
            }
            MoveError::NotOnTwist { edge } => {
                write!(f, "untwist: edge {edge} does not lie on a kink")
            }
            MoveError::PokeSelf { edge } => {
                write!(f, "poke: cannot poke edge {edge} underneath itself")
            }
            MoveError::PokeNotCofacial { under, over } => {
                write!(f, "poke: edges {under} and {over} do not share a face")
            }
            MoveError::EdgeOnKink { edge } => {
                write!(f, "poke: edge {edge} lies on a kink")
            }
            MoveError::NotOnPoke { edge1, edge2 } => {
                write!(f, "unpoke: edges {edge1} and {edge2} do not bound a bigon")
            }
            MoveError::SlideNotCofacial { edges } => {
                write!(
                    f,
                    "slide: edges {}, {}, {} do not bound a triangular face",
                    edges[0], edges[1], edges[2]
                )
            }
            MoveError::SlideBadLayering { edges } => {
                write!(
                    f,
                    "slide: edges {}, {}, {} are not layered as over, under, and mixed",
                    edges[0], edges[1], edges[2]
                )
            }
            MoveError::Malformed(err) => write!(f, "malformed diagram: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DiagramError> for MoveError {
    fn from(err: DiagramError) -> Self {
        MoveError::Malformed(err)
    }
}
