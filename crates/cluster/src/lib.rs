pub mod group;
pub mod params;

pub use group::*;
pub use params::*;
