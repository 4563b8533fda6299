pub mod compute;
pub mod songs;
