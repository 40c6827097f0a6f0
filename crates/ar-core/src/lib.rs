//! Platform-free core of the marker AR experience: presentation state,
//! gesture classification, picking and the callout animation.
//!
//! Nothing in here references browser or renderer APIs; the web front-end
//! feeds events in and applies the returned [`SceneEffect`]s.

pub mod callout;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod gesture;
pub mod hit_test;
pub mod presentation;
pub mod registry;
pub mod rotation;
pub mod session;
pub mod slideshow;
pub mod state;

pub use callout::*;
pub use config::*;
pub use constants::*;
pub use effects::*;
pub use error::*;
pub use gesture::*;
pub use hit_test::*;
pub use presentation::*;
pub use registry::*;
pub use rotation::*;
pub use session::*;
pub use slideshow::*;
pub use state::*;
