//! # Restaurant API Library
//!
//! This library exposes the core modules of the application for integration testing.

pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod validation;
