pub mod pack;
pub mod pool;
pub mod vault;

pub use pack::*;
pub use pool::*;
pub use vault::*;
