//! Client for the Python inference service.
//!
//! The service hosts the pretrained emotion, sentiment, zero-shot and image
//! captioning pipelines. [`MlClient`] implements the intent engine's
//! [`cine_intent::SceneClassifier`] and [`cine_intent::ImageCaptioner`] traits
//! so it can be handed straight to a [`cine_intent::SceneAnalyzer`].

pub mod classifier;
pub mod client;
pub mod error;
pub mod types;

pub use client::{MlClient, MlClientConfig};
pub use error::{MlError, MlResult};
pub use types::{LabelScore, ZeroShotResponse};
