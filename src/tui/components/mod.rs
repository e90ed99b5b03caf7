// Components module - the UI building blocks
//
// - Number display: the clickable widget at the center of the screen
// - Status bar: uptime, current number, click count, last log line
// - Toast: auto-dismissing click feedback overlay
//
// Each component is a focused, single-responsibility module.

pub mod number_display;
pub mod status_bar;
pub mod toast;

pub use number_display::{NodeId, NumberDisplay};
pub use status_bar::StatusBar;
pub use toast::Toast;
