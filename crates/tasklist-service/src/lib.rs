mod http;
mod traits;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use http::{HttpService, DEFAULT_API_URL};
pub use traits::{ServiceError, TaskListService};
