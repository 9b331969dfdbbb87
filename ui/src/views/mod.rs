mod dashboard;
pub use dashboard::{category_container_id, Dashboard, TREND_CONTAINER_ID};
