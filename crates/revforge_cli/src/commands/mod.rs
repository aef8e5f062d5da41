pub mod create;
pub mod delete;
pub mod edit_timestamp;
pub mod sanitize;
pub mod view_metadata;
