pub mod filter;
pub mod ingest;
pub mod point;
pub mod summary;

pub use filter::*;
pub use ingest::*;
pub use point::*;
pub use summary::*;
