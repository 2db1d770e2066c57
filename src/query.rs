use crate::models::{Location, Path};

/// Read-only access to the campus location catalog and path finder
///
/// Implementations are shared across request handlers and must be safe to
/// read concurrently. The HTTP layer only calls `shortest_path` with names
/// that `exists` has already accepted.
pub trait QueryService: Send + Sync {
    /// All known locations, in the implementation's own order
    fn all_locations(&self) -> Vec<Location>;

    /// Whether `short_name` names a known location
    fn exists(&self, short_name: &str) -> bool;

    /// Shortest path between two known locations, or `None` if they are not connected
    fn shortest_path(&self, src: &str, dest: &str) -> Option<Path>;
}
