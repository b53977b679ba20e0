pub mod canonical_status;

pub use canonical_status::CanonicalStatus;
