pub mod slot_generator;
pub mod constraints;
pub mod mirror;
pub mod allocator;
pub mod run;

pub use slot_generator::*;
pub use constraints::*;
pub use mirror::*;
pub use allocator::*;
pub use run::*;
