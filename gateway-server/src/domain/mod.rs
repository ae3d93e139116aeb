pub mod data_item;
pub mod error;
pub mod id;
pub mod pagination;
pub mod stats;
pub mod user;

/// Treats an empty string the same as an absent value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
