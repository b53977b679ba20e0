pub mod executor;
pub mod processors;
pub mod progress_tracker;

pub use executor::ImportExecutor;
pub use progress_tracker::ProgressTracker;
