//! Track geometry: positions, spaces, nexus powers, and the board itself.

pub mod position;
pub mod power;
pub mod space;
pub mod track;

pub use position::Position;
pub use power::{NexusPower, PowerEffect};
pub use space::{Space, SpaceKind};
pub use track::Board;
