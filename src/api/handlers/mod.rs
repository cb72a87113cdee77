pub mod health;
pub mod shrinkage;
pub mod users;
