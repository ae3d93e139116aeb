//! Read-only mock tables standing in for a data store.
//!
//! Tables are built on first access and never mutated afterwards.

pub mod mock_data;
pub mod mock_users;
