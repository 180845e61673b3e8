//! Canvas particle fields.
//!
//! Two designs share one engine:
//! - **Hero**: a sparse network whose particles bounce off the edges and are
//!   joined by faint lines when close.
//! - **Global**: glowing, hue-tinted dots that pulse, wrap around the edges
//!   and link up with squared-distance checks.
//!
//! Each canvas owns its own [`ParticleAnimator`]. The theme is read from the
//! document on every frame, and a window resize regenerates the particles
//! once it has settled for [`RESIZE_QUIET`].
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{ParticleCanvas, Sizing, Variant};
//!
//! view! {
//!     <section id="home" class="hero">
//!         <ParticleCanvas variant=Variant::Hero id="heroCanvas" sizing=Sizing::Parent />
//!     </section>
//! }
//! ```

mod animator;
mod component;
pub mod debounce;
pub mod palette;
pub mod particles;
pub mod render;

pub use animator::{ParticleAnimator, Variant};
pub use component::{ParticleCanvas, Sizing};
pub use debounce::{Debouncer, RESIZE_QUIET, Ticket};
pub use particles::{Boundary, FieldConfig, Particle, ParticleField, Shimmer};
pub use render::Surface;
