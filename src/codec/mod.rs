// Codec module for the chatlink binary token format

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod sink;
pub mod types;
