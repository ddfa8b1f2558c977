//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration
//! - `nav_panel.rs`: Navigation list built from the registry
//! - `right_panel.rs`: Dispatches to the selected entry's panel
//! - `widgets/`: Reusable UI components
//! - `panels/`: Per-section panel renderers

mod layout;
mod nav_panel;
mod right_panel;

pub mod panels;
pub mod widgets;

pub use layout::render;
