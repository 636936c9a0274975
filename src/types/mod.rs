pub mod error;
pub mod hero;
pub mod hero_power;
pub mod power;
pub mod response;
