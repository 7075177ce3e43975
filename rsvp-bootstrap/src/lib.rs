pub mod context;
pub mod lifecycle;
pub mod sync_worker;

pub use lifecycle::{run_standalone, RunOptions};
