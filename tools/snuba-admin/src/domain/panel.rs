//! Panel kinds and the data each one loads from the admin API.

use crate::api::{AdminApiClient, ApiError, ConfigMap, SystemQuery};

/// Panels that are backed by admin API data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Runtime config key/value table.
    RuntimeConfig,
    /// Predefined ClickHouse system queries.
    ClickhouseQueries,
}

impl PanelKind {
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::RuntimeConfig => "runtime_config",
            PanelKind::ClickhouseQueries => "clickhouse_queries",
        }
    }

    /// Fetch the data this panel displays.
    pub async fn fetch(self, client: &AdminApiClient) -> Result<PanelData, ApiError> {
        match self {
            PanelKind::RuntimeConfig => client.get_configs().await.map(PanelData::Configs),
            PanelKind::ClickhouseQueries => client.get_queries().await.map(PanelData::Queries),
        }
    }
}

/// Data delivered to a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Configs(ConfigMap),
    Queries(Vec<SystemQuery>),
}

impl PanelData {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelData::Configs(_) => PanelKind::RuntimeConfig,
            PanelData::Queries(_) => PanelKind::ClickhouseQueries,
        }
    }
}

/// Load state of one panel's data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Never requested.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Last request failed; message is ready for display.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
