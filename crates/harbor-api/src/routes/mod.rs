pub mod assessment;
pub mod avatar;
pub mod health;
pub mod programs;
