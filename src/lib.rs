pub mod app;
pub mod domain;
pub mod error;
pub mod link;
pub mod probe;
pub mod report;
pub mod resolver;
