//! Domain models for the admin console.

mod app;
mod navigation;
mod panel;

pub use app::{hotkey_for, hotkey_index, App, AppState};
pub use navigation::{NavTarget, NavigationEntry, NavigationRegistry, RegistryError, NAV_ITEMS};
pub use panel::{LoadState, PanelData, PanelKind};
