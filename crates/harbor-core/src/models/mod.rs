pub mod assessment;
pub mod image;
