mod american_flag_sort;
mod comparative_sort;

pub use american_flag_sort::*;
pub use comparative_sort::*;
