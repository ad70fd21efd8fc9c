pub mod features;
pub mod generate;
pub mod list;

pub use features::*;
pub use generate::*;
pub use list::*;
