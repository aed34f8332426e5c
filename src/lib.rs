// src/lib.rs

//! ATS Job Scraper Library

pub mod classify;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
