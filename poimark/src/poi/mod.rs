mod collection;
mod feature;
mod position;
mod properties;

pub use collection::*;
pub use feature::*;
pub use position::*;
pub use properties::*;
