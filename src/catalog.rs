//! Named-knot lookup over externally supplied data.
//!
//! The catalog never touches a file: whoever owns the tabular knot source
//! parses it and hands the `(name, flat code)` records in as plain data.
//! Lookup failures are their own error kind, distinct from move
//! preconditions, so a driver can tell "no such knot" from "illegal move".
//!
//! Fixture diagrams that tests and benchmarks reach for — the one-crossing
//! kink and two famously tangled unknots — live here as literal codes.
//!
//! # Citations
//! - Livingston & Moore, KnotInfo: Table of Knot Invariants – naming scheme
//! - Kauffman, "Knots and Physics" (1991) – the Ochiai unknot

use crate::codec::CodecError;
use crate::diagram::{Crossing, Diagram, Edge};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a catalog name distinguishes alternating from non-alternating
/// knots. Required above ten crossings, not applicable at or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alternation {
    /// The alternating table, tag `a`.
    Alternating,
    /// The non-alternating table, tag `n`.
    NonAlternating,
}

impl Alternation {
    fn tag(self) -> &'static str {
        match self {
            Alternation::Alternating => "a",
            Alternation::NonAlternating => "n",
        }
    }
}

/// Error raised by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry under the resolved name.
    UnknownName {
        /// The name that failed to resolve.
        name: String,
    },
    /// Knots above ten crossings need an alternation tag.
    AlternationRequired {
        /// The requested crossing count.
        crossings: u32,
    },
    /// Knots at or below ten crossings are not split by alternation.
    AlternationNotApplicable {
        /// The requested crossing count.
        crossings: u32,
    },
    /// A record's flat code did not group into crossings.
    BadRecord {
        /// The record's name.
        name: String,
        /// The underlying codec failure.
        source: CodecError,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownName { name } => write!(f, "knot {name} does not exist"),
            CatalogError::AlternationRequired { crossings } => {
                write!(f, "knots with {crossings} crossings require an alternation tag")
            }
            CatalogError::AlternationNotApplicable { crossings } => {
                write!(f, "knots with {crossings} crossings are not split by alternation")
            }
            CatalogError::BadRecord { name, source } => {
                write!(f, "record for {name} is malformed: {source}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::BadRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A name → diagram table handed in as data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, Diagram>,
}

impl Catalog {
    /// Builds a catalog from `(name, flat code)` records.
    pub fn from_records(
        records: impl IntoIterator<Item = (String, Vec<Edge>)>,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for (name, code) in records {
            let diagram = Diagram::from_flat_code(&code)
                .map_err(|source| CatalogError::BadRecord { name: name.clone(), source })?;
            entries.insert(name, diagram);
        }
        Ok(Self { entries })
    }

    /// Looks up a diagram by its raw catalog name.
    pub fn get(&self, name: &str) -> Result<&Diagram, CatalogError> {
        self.entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownName { name: name.to_owned() })
    }

    /// Looks up a prime knot by crossing count and table index.
    ///
    /// Names resolve as `{crossings}{tag}_{index}`; `0_1` is always the
    /// empty unknot, table or no table.
    pub fn knot(
        &self,
        crossings: u32,
        index: u32,
        alternation: Option<Alternation>,
    ) -> Result<Diagram, CatalogError> {
        match alternation {
            None if crossings > 10 => return Err(CatalogError::AlternationRequired { crossings }),
            Some(_) if crossings <= 10 => {
                return Err(CatalogError::AlternationNotApplicable { crossings })
            }
            _ => {}
        }
        let tag = alternation.map_or("", Alternation::tag);
        let name = format!("{crossings}{tag}_{index}");
        if name == "0_1" {
            return Ok(Diagram::unknot());
        }
        self.get(&name).cloned()
    }

    /// The records in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Diagram)> {
        self.entries.iter().map(|(name, diagram)| (name.as_str(), diagram))
    }

    /// The first `n` records in name order.
    pub fn first_n(&self, n: usize) -> Vec<(&str, &Diagram)> {
        self.iter().take(n).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The one-crossing kinked unknot, `(1, 1, 2, 2)`.
pub fn infinity_unknot() -> Diagram {
    Diagram::new(vec![Crossing::new(1, 1, 2, 2)])
}

/// Thistlethwaite's 15-crossing unknot.
pub fn thistlethwaite_unknot() -> Diagram {
    Diagram::new(vec![
        Crossing::new(22, 2, 23, 1),
        Crossing::new(3, 27, 4, 26),
        Crossing::new(5, 21, 6, 20),
        Crossing::new(7, 18, 8, 19),
        Crossing::new(9, 25, 10, 24),
        Crossing::new(11, 2, 12, 3),
        Crossing::new(4, 13, 5, 14),
        Crossing::new(15, 6, 16, 7),
        Crossing::new(30, 17, 1, 18),
        Crossing::new(19, 14, 20, 15),
        Crossing::new(28, 22, 29, 21),
        Crossing::new(23, 11, 24, 10),
        Crossing::new(25, 9, 26, 8),
        Crossing::new(27, 12, 28, 13),
        Crossing::new(16, 29, 17, 30),
    ])
}

/// Ochiai's 13-crossing unknot.
pub fn ochiai_unknot() -> Diagram {
    Diagram::new(vec![
        Crossing::new(12, 2, 13, 1),
        Crossing::new(3, 6, 4, 7),
        Crossing::new(5, 24, 6, 25),
        Crossing::new(7, 15, 8, 14),
        Crossing::new(16, 10, 17, 9),
        Crossing::new(26, 12, 1, 11),
        Crossing::new(13, 20, 14, 21),
        Crossing::new(22, 15, 23, 16),
        Crossing::new(10, 18, 11, 17),
        Crossing::new(19, 3, 20, 2),
        Crossing::new(21, 8, 22, 9),
        Crossing::new(23, 4, 24, 5),
        Crossing::new(25, 19, 26, 18),
    ])
}
