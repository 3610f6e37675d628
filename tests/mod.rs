pub mod accumulation;
pub mod types;
