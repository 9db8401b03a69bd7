pub mod health;
pub mod numbers;
pub mod stocks;
