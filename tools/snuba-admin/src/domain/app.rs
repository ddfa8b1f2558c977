//! Application state management.

use chrono::{DateTime, Utc};

use crate::api::{ApiError, ConfigMap, SystemQuery};

use super::{LoadState, NavTarget, NavigationEntry, NavigationRegistry, PanelData, PanelKind};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main console view.
    #[default]
    Dashboard,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Sections shown in the navigation list.
    pub registry: &'static NavigationRegistry,
    /// Index of the selected navigation entry.
    pub selected: usize,
    /// Runtime config panel data.
    pub configs: LoadState<ConfigMap>,
    /// ClickHouse queries panel data.
    pub queries: LoadState<Vec<SystemQuery>>,
    /// Highlighted query in the ClickHouse panel.
    pub query_cursor: usize,
    /// Last successful fetch.
    pub last_refresh: Option<DateTime<Utc>>,
    /// Error message to display (if any).
    pub error_message: Option<String>,
    /// Serving built-in sample data, no backend.
    pub demo: bool,
    refresh_requested: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance over the standard registry.
    pub fn new() -> Self {
        Self::with_registry(NavigationRegistry::standard())
    }

    pub fn with_registry(registry: &'static NavigationRegistry) -> Self {
        Self {
            state: AppState::Dashboard,
            registry,
            selected: 0,
            configs: LoadState::Idle,
            queries: LoadState::Idle,
            query_cursor: 0,
            last_refresh: None,
            error_message: None,
            demo: false,
            refresh_requested: false,
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: char) {
        match self.state {
            AppState::Dashboard => self.handle_dashboard_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Dashboard;
            }
            AppState::Quit => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: char) {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'r' | 'R' => self.refresh_requested = true,
            'j' => self.select_next(),
            'k' => self.select_prev(),
            ']' => self.move_query_cursor(1),
            '[' => self.move_query_cursor(-1),
            c => {
                if let Some(index) = hotkey_index(c) {
                    self.select(index);
                }
            }
        }
    }

    /// Select an entry by menu position. Out-of-range positions are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.registry.len() {
            self.selected = index;
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.registry.prev_index(self.selected);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        self.selected = self.registry.next_index(self.selected);
    }

    /// The currently selected navigation entry.
    pub fn selected_entry(&self) -> &'static NavigationEntry {
        // `selected` is only ever set through `select` or the wrapping helpers
        self.registry
            .get(self.selected)
            .unwrap_or(&self.registry.entries()[0])
    }

    fn move_query_cursor(&mut self, delta: isize) {
        if self.selected_entry().target != NavTarget::Panel(PanelKind::ClickhouseQueries) {
            return;
        }
        let len = self.queries.loaded().map(Vec::len).unwrap_or(0);
        if len == 0 {
            self.query_cursor = 0;
            return;
        }
        self.query_cursor = (self.query_cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Panel the shell should fetch now, if any.
    ///
    /// A panel is fetched the first time it is shown and again whenever a
    /// refresh is requested while it is selected. The returned panel is marked
    /// as loading.
    pub fn take_fetch_request(&mut self) -> Option<PanelKind> {
        let refresh = std::mem::take(&mut self.refresh_requested);
        if self.demo {
            return None;
        }

        let NavTarget::Panel(kind) = self.selected_entry().target else {
            return None;
        };

        let idle = match kind {
            PanelKind::RuntimeConfig => matches!(self.configs, LoadState::Idle),
            PanelKind::ClickhouseQueries => matches!(self.queries, LoadState::Idle),
        };
        if !(idle || refresh) || self.is_loading(kind) {
            return None;
        }

        match kind {
            PanelKind::RuntimeConfig => self.configs = LoadState::Loading,
            PanelKind::ClickhouseQueries => self.queries = LoadState::Loading,
        }
        Some(kind)
    }

    pub fn is_loading(&self, kind: PanelKind) -> bool {
        match kind {
            PanelKind::RuntimeConfig => self.configs.is_loading(),
            PanelKind::ClickhouseQueries => self.queries.is_loading(),
        }
    }

    /// Store the outcome of a panel fetch.
    pub fn apply(&mut self, kind: PanelKind, result: Result<PanelData, ApiError>) {
        match result {
            Ok(PanelData::Configs(configs)) => {
                self.configs = LoadState::Loaded(configs);
                self.mark_refreshed();
            }
            Ok(PanelData::Queries(queries)) => {
                if self.query_cursor >= queries.len() {
                    self.query_cursor = 0;
                }
                self.queries = LoadState::Loaded(queries);
                self.mark_refreshed();
            }
            Err(e) => {
                let message = e.to_string();
                self.error_message = Some(format!("{}: {}", kind.name(), message));
                match kind {
                    PanelKind::RuntimeConfig => self.configs = LoadState::Failed(message),
                    PanelKind::ClickhouseQueries => self.queries = LoadState::Failed(message),
                }
            }
        }
    }

    fn mark_refreshed(&mut self) {
        self.last_refresh = Some(Utc::now());
        self.error_message = None;
    }

    /// Fill every panel with sample data.
    pub fn load_demo_data(&mut self) {
        self.demo = true;

        let mut configs = ConfigMap::new();
        configs.insert("max_rows".to_string(), 1000_i64.into());
        configs.insert("cluster".to_string(), "default".into());
        configs.insert("enable_clickhouse_querylog_api".to_string(), 0_i64.into());
        configs.insert("query_settings/max_threads".to_string(), 10_i64.into());
        configs.insert(
            "rate_limit_sample_rate".to_string(),
            crate::api::ConfigValue::Number(
                serde_json::Number::from_f64(0.25).unwrap_or_else(|| serde_json::Number::from(0_i64)),
            ),
        );
        self.configs = LoadState::Loaded(configs);

        self.queries = LoadState::Loaded(vec![
            SystemQuery {
                name: "CurrentMerges".to_string(),
                sql: "SELECT table, elapsed, progress, result_part_name FROM system.merges"
                    .to_string(),
                description: Some("Merges that are currently running".to_string()),
            },
            SystemQuery {
                name: "ActiveParts".to_string(),
                sql: "SELECT table, count() AS parts FROM system.parts WHERE active GROUP BY table"
                    .to_string(),
                description: Some("Active parts per table".to_string()),
            },
            SystemQuery {
                name: "slow_queries".to_string(),
                sql: "SELECT 1".to_string(),
                description: None,
            },
        ]);

        self.mark_refreshed();
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

/// Menu position for a digit hotkey (`1` is the first entry).
pub fn hotkey_index(key: char) -> Option<usize> {
    match key {
        '1'..='9' => Some(key as usize - '1' as usize),
        _ => None,
    }
}

/// Digit hotkey for a menu position.
pub fn hotkey_for(index: usize) -> Option<char> {
    if index < 9 {
        char::from_digit(index as u32 + 1, 10)
    } else {
        None
    }
}
