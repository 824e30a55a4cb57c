//! Common types and traits shared by every domain module

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
