pub mod health;
pub mod refine;
pub mod stream;
pub mod tune;
pub mod upload;
