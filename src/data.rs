mod attendance;
pub use attendance::*;

mod day;
pub use day::*;

mod summary;
pub use summary::*;

mod worker;
pub use worker::*;
