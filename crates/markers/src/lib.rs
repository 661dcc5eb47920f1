pub mod instructions;
pub mod lod;
pub mod style;
pub mod view;

pub use instructions::*;
pub use lod::*;
pub use style::*;
pub use view::*;
