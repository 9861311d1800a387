pub mod download;
pub mod health;
pub mod results;
pub mod status;
pub mod upload;
