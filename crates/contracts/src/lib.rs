//! Shared types for the status board: canonical statuses, the resolver that
//! produces them, and the DTOs exchanged between ingestion and presentation.

pub mod enums;
pub mod projections;
pub mod shared;
pub mod usecases;
