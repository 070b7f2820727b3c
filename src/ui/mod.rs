// UI module - handles all user interface rendering

mod creatures;
mod events;
mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
