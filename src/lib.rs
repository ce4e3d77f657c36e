//! Knotwork: a planar-diagram knot calculus.
//!
//! This crate implements the combinatorics of knot and link diagrams in PD
//! (planar diagram) notation, providing:
//! - An immutable [`Diagram`] value with structural queries: adjacency,
//!   face tracing, and over/under edge classification.
//! - The five Reidemeister move operators — twist, untwist, poke, unpoke,
//!   slide — as pure transforms with checked preconditions, plus
//!   enumerators listing every legal application.
//! - Equivalence up to cyclic relabeling, strand reversal, and mirroring.
//! - The Kauffman bracket and Jones polynomial over an exact sparse
//!   Laurent-polynomial ring.
//!
//! Everything is a value: no operation mutates its input, performs I/O, or
//! blocks, so diagrams and polynomials share freely across threads. The
//! only deliberately parallel path is the bracket's `2^C` state sum.
//!
//! # Mathematical Foundations
//!
//! A PD code lists one 4-tuple of edge labels per crossing; each label in
//! `1..=2E` occurs exactly twice across the code. Reidemeister's theorem
//! makes the three local moves a complete calculus for diagram equivalence,
//! and the Kauffman bracket's state sum descends to the Jones polynomial
//! after writhe normalization.
//!
//! # References
//!
//! - Reidemeister, "Elementare Begründung der Knotentheorie" (1927)
//! - Kauffman, "State models and the Jones polynomial", Topology 26 (1987)
//! - Jones, "A polynomial invariant for knots via von Neumann algebras" (1985)
//! - Adams, "The Knot Book" (1994)
//!
//! # Example
//!
//! ```
//! use knotwork::prelude::*;
//!
//! let trefoil = Diagram::from_flat_code(&[2, 5, 3, 6, 4, 1, 5, 2, 6, 3, 1, 4]).unwrap();
//! assert!(trefoil.is_valid());
//!
//! let poked = poke(&trefoil, 1, 4).unwrap();
//! assert_eq!(kauffman_bracket(&poked), kauffman_bracket(&trefoil));
//! ```

pub mod catalog;
pub mod codec;
pub mod diagram;
pub mod equivalence;
pub mod faces;
pub mod invariants;
pub mod moves;
pub mod polynomial;

pub use crate::catalog::{Alternation, Catalog, CatalogError};
pub use crate::codec::CodecError;
pub use crate::diagram::{Crossing, Diagram, DiagramError, Edge, SignedEdge, Unsupported};
pub use crate::faces::Face;
pub use crate::invariants::{jones_polynomial, kauffman_bracket, writhe};
pub use crate::moves::{
    is_slidable, is_unpokable, poke, pokables, slidables, slide, twist, twistables, unpoke,
    unpokables, untwist, untwistables, MoveError, Twist,
};
pub use crate::polynomial::{Polynomial, PolynomialError};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::catalog::{
        infinity_unknot, ochiai_unknot, thistlethwaite_unknot, Alternation, Catalog, CatalogError,
    };
    pub use crate::codec::CodecError;
    pub use crate::diagram::{Crossing, Diagram, DiagramError, Edge, SignedEdge, Unsupported};
    pub use crate::faces::Face;
    pub use crate::invariants::{jones_polynomial, kauffman_bracket, writhe};
    pub use crate::moves::{
        is_slidable, is_unpokable, poke, pokables, slidables, slide, twist, twistables, unpoke,
        unpokables, untwist, untwistables, MoveError, Twist,
    };
    pub use crate::polynomial::{Polynomial, PolynomialError};
}

impl Default for Diagram {
    fn default() -> Self {
        Diagram::unknot()
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn trefoil() -> Diagram {
        Diagram::from_flat_code(&[2, 5, 3, 6, 4, 1, 5, 2, 6, 3, 1, 4]).unwrap()
    }

    /// A full tour: construct, query, move, invert, measure.
    #[test]
    fn move_and_measure_round_trip() {
        let d = trefoil();
        assert!(d.is_valid());
        assert_eq!(writhe(&d), -3);

        let twisted = twist(&d, 2, Twist::PositiveRight).unwrap();
        assert!(twisted.is_valid());
        let back = untwist(&twisted, 3).unwrap();
        assert!(back.equals(&d));

        let poked = poke(&d, 2, 5).unwrap();
        assert_eq!(kauffman_bracket(&poked), kauffman_bracket(&d));
        let unpoked = unpoke(&poked, 3, 8).unwrap();
        assert!(unpoked.identical(&d));
    }

    /// The menu enumerators feed the move functions without error.
    #[test]
    fn menus_and_moves_agree() {
        let d = trefoil();
        assert_eq!(twistables(&d).len(), 6);
        for (under, over) in pokables(&d).unwrap() {
            assert!(poke(&d, under, over).is_ok());
        }
        assert!(untwistables(&d).is_empty());
        assert!(slidables(&d).unwrap().is_empty());
    }

    /// Famously tangled unknots are valid fixtures with unit Jones.
    #[test]
    fn tangled_unknots_have_unit_jones() {
        for unknot in [thistlethwaite_unknot(), ochiai_unknot()] {
            assert!(unknot.is_valid());
            assert_eq!(jones_polynomial(&unknot).unwrap(), Polynomial::one(1));
        }
    }
}
