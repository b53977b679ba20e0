pub mod app;
pub mod projections;
pub mod shared;
pub mod usecases;
