pub mod apply;
pub mod config;
pub mod info;
pub mod sample;
