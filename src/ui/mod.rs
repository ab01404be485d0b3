//! Terminal rendering. Everything here is read-only over the engine
//! state: the frame loop ticks the controller, then hands it to these
//! functions to draw.

pub mod chrome;
pub mod menu;
pub mod overlays;
pub mod scene;
