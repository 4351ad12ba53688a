pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod map;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;
