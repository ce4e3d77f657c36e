//! The flat-code contract: a diagram as one integer sequence.
//!
//! External tooling (catalog loaders, batch generators) exchanges diagrams
//! as a flat sequence of edge labels in crossing order, four per crossing.
//! The textual wrapping of that sequence is the collaborator's business;
//! only the grouped-integer form crosses this boundary.

use crate::diagram::{Crossing, Diagram, Edge};
use std::fmt;

/// Error raised when a flat code cannot be grouped into crossings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The sequence length is not a multiple of four.
    RaggedCode {
        /// The offending length.
        length: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::RaggedCode { length } => {
                write!(f, "flat code of length {length} does not group into crossings of four")
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl Diagram {
    /// Serializes the crossing sequence as a flat label sequence.
    pub fn flat_code(&self) -> Vec<Edge> {
        self.crossings().iter().flat_map(|c| c.0).collect()
    }

    /// Rebuilds a diagram from a flat label sequence, four labels per
    /// crossing in order. The empty sequence is the unknot.
    pub fn from_flat_code(code: &[Edge]) -> Result<Diagram, CodecError> {
        if code.len() % 4 != 0 {
            return Err(CodecError::RaggedCode { length: code.len() });
        }
        Ok(code
            .chunks_exact(4)
            .map(|chunk| Crossing::new(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect())
    }
}
