pub mod consts;
pub mod controller;
pub mod error;
pub mod io;
pub mod sample;
pub mod settings;
pub mod transform;
