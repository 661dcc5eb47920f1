pub mod gate;
pub mod regions;
pub mod state;

pub use gate::*;
pub use regions::*;
pub use state::*;
