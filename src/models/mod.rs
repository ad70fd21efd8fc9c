pub mod constraints;
pub mod feature;
pub mod priority;
pub mod test_case;

pub use constraints::*;
pub use feature::*;
pub use priority::*;
pub use test_case::*;
