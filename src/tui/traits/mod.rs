//! Component trait system for the TUI
//!
//! Instead of App knowing how to render and hit-test every widget,
//! components declare their own capabilities through traits:
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Clickable`] - Components that handle mouse input

mod clickable;
mod component;

pub use clickable::{Clickable, Handled};
pub use component::{Component, ComponentId, RenderContext};
