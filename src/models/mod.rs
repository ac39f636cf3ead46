pub mod condition;
pub mod observation;
pub mod summary;

pub use condition::*;
pub use observation::*;
pub use summary::*;
