pub mod export;
pub mod sink;
