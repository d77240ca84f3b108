//! Pieces and their identifiers.

pub mod piece;

pub use piece::{Piece, PieceId, PieceKind};
