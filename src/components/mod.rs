pub mod contact;
pub mod counter;
pub mod cursor_glow;
pub mod nav;
pub mod particle_field;
pub mod reveal;
pub mod theme_toggle;
pub mod typing;
