pub mod app;
pub mod catalog;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod disclosure;
pub mod error;
pub mod gesture;
pub mod model;
pub mod solutions;
pub mod speech;
pub mod ui;
pub mod view_models;

pub use app::QuestApp;
