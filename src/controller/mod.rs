pub mod group;
pub mod param;
pub mod series;
pub mod training;
