pub mod consts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
