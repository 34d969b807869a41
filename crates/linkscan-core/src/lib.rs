pub mod config;
pub mod logging;

pub mod features;
pub mod labels;
pub mod model;
pub mod normalize;
pub mod service;
