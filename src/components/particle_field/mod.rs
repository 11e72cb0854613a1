//! Interactive particle backdrop.
//!
//! Renders a small set of drifting particles that:
//! - Move on a fixed-period tick in a resolution-independent `[0, 100]` space
//! - Bounce off the container edges
//! - Accelerate toward the mouse pointer when it is nearby
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{FieldConfig, InteractiveParticles};
//!
//! view! { <InteractiveParticles config=FieldConfig::default() class="opacity-60" /> }
//! ```

mod component;
mod field;
pub mod palette;
mod pointer;

pub use component::{InteractiveParticles, TICK_PERIOD};
pub use field::{FieldConfig, Particle, ParticleField, ParticleSnapshot, attraction_factor};
pub use palette::Color;
pub use pointer::{Bounds, PointerState};
