pub mod test_utils;

pub mod context_path;
pub mod handle_construction;
pub mod properties;
pub mod value_path;
