pub mod marker;
pub mod watcher;
