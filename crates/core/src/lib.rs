//! Core library for the horizontal project showcase.
//!
//! The crate implements the interactive heart of a single-page portfolio
//! site's project carousel: discrete slide navigation coupled to a damped
//! spring, touch gesture recognition, visibility-gated keyboard input,
//! viewport classification, and frame-coalesced consumption of the hero
//! section's scroll progress. Each module owns a distinct subsystem and the
//! [`stage`] module wires them together behind a toolkit-agnostic event
//! boundary.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gesture;
pub mod keyboard;
pub mod progress;
pub mod render;
pub mod spring;
pub mod stage;
pub mod viewport;

pub use carousel::{CarouselController, CarouselState, Direction, NavCommand};
pub use catalog::{ProjectCatalog, ProjectRecord};
pub use config::{AppConfig, GestureConfig, KeyboardConfig, ProgressConfig, SpringConfig};
pub use error::{Result, ShowcaseError};
pub use gesture::GestureRecognizer;
pub use keyboard::{KeyboardNavigator, NavKey};
pub use progress::ProgressThrottle;
pub use render::{PanelFrame, StripFrame};
pub use spring::SpringInterpolator;
pub use stage::{InputEvent, ShowcaseStage};
pub use viewport::ViewportClassifier;
