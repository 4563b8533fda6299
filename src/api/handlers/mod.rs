pub mod calculator;
pub mod health;
pub mod hello;
pub mod songs;
