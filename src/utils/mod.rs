pub mod shuffle;
pub mod timing;

pub use shuffle::{shuffle_array, shuffle_array_with};
pub use timing::wait;
