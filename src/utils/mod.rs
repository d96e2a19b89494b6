pub mod async_queue;
pub mod path;

pub use async_queue::AsyncTaskQueue;
pub use path::strip_extended_prefix;
