pub mod compose;
pub mod frames;
pub mod info;
pub mod series;
