#[cfg(test)]
pub mod test_utils;

mod bucket_set;
mod sort_utils;

pub use bucket_set::*;
pub use sort_utils::*;
