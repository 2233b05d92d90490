pub mod aliases;
pub mod summary;
pub mod types;
pub mod write;

pub use aliases::{ColumnAliases, Config, MeetingColumns, ReaderConfig};
pub use summary::Summary;
pub use types::{ClassRecord, Community, CommunityHeader, MeetingEntry};
pub use write::write_communities;
