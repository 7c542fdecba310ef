//! FitFood: restaurant catalog, BMI-based registration and cart pricing for
//! fitness-focused food delivery.

pub mod app;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod money;
pub mod profile;
pub mod state;
pub mod storage;
