pub mod news;

pub use news::{missing_field, News};
