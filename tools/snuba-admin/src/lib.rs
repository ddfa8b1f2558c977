//! Snuba-Admin: admin console for a ClickHouse-backed Snuba cluster.
//!
//! Two independent cores:
//!
//! - [`api::AdminApiClient`]: typed reads of runtime configs and predefined
//!   ClickHouse system queries from the admin HTTP service.
//! - [`domain::NavigationRegistry`]: the fixed, ordered list of console
//!   sections and the panel each one mounts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SNUBA-ADMIN                                                    │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  NAVIGATION            │  SELECTED PANEL                        │
//! │  [1] Overview        ○ │  (panel renderer for the entry)        │
//! │  [2] Runtime config  ● │                                        │
//! │  [3] ClickHouse🏚️    ● │                                        │
//! │  ...                   │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```
//!
//! The client knows nothing about the registry, and the registry only names
//! panel kinds. A panel kind declares which client call feeds it through
//! [`domain::PanelKind::fetch`].

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;

pub use api::{AdminApiClient, ApiError, ConfigMap, ConfigValue, SystemQuery};
pub use config::AdminConfig;
pub use domain::{App, AppState, NavTarget, NavigationEntry, NavigationRegistry, PanelKind};
