pub mod employee;
pub mod error_info;
pub mod record_id;
