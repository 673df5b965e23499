//! Alchemy Vision image analysis: face detection with age and gender
//! estimates.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{Age, Gender, ImageFace, ImageFaces};
pub use service::{AlchemyVision, DEFAULT_URL};
