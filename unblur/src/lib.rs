//! Backend relay for text de-blur recognition.
//!
//! Accepts an uploaded image, forwards it to the GLM-4.5V vision API for
//! optical text recognition, and optionally applies natural-language
//! instructed refinement to the recognized text. Progress is reported to
//! clients over a fixed-stage server-sent-event pipeline.

pub mod api;
pub mod config;
pub mod error;
pub mod glm;
pub mod models;
pub mod progress;
pub mod validate;
