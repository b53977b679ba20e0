pub mod progress;
pub mod record;
pub mod request;
pub mod response;

pub use progress::{ImportProgress, ImportStatus};
pub use record::StatusRecord;
pub use request::ImportRequest;
pub use response::ImportResponse;
