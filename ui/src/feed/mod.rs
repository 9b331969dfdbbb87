mod model;
pub use model::{Account, AttachmentKind, MediaAttachment, Post};

mod client;
pub use client::{FeedClient, FeedError};

mod sync;
pub use sync::{FeedEvent, FeedState, FeedSynchronizer, POLL_INTERVAL_MS};

mod view;
pub use view::{LiveFeed, Toot, FEED_CONTAINER_ID};
