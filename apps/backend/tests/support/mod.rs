#![allow(dead_code)]

pub mod websocket;

pub use app_builder::create_test_app;
