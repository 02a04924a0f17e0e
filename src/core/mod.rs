/// Core functionality modules
///
/// Contains the bookmark store and the filesystem checks behind
/// adding and fixing bookmarks.

pub mod probe;
pub mod recorder;
pub mod store;

pub use probe::KindProbe;
pub use recorder::Recorder;
pub use store::{BookmarkStore, FixReport, StoreStats};
