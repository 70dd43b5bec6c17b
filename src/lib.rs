// src/lib.rs

pub mod closet;
pub mod color;
pub mod config;
pub mod preferences;
pub mod profile;
pub mod prompt;
pub mod season;
pub mod storage;
pub mod vision;
