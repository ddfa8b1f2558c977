//! Navigation registry: the fixed, ordered set of admin sections.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use super::PanelKind;

/// What a navigation entry mounts when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// A built panel.
    Panel(PanelKind),
    /// Section under construction. Renders nothing.
    Placeholder,
}

impl NavTarget {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, NavTarget::Placeholder)
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Panel(kind) => kind.name(),
            NavTarget::Placeholder => "placeholder",
        }
    }
}

/// One selectable section in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Stable identifier, unique across the registry.
    pub id: &'static str,
    /// Menu label. May carry decorative annotations.
    pub display: &'static str,
    pub target: NavTarget,
}

impl NavigationEntry {
    pub const fn new(id: &'static str, display: &'static str, target: NavTarget) -> Self {
        Self { id, display, target }
    }

    pub fn is_placeholder(&self) -> bool {
        self.target.is_placeholder()
    }
}

/// All console sections. Array order is menu order.
pub static NAV_ITEMS: [NavigationEntry; 6] = [
    NavigationEntry::new("overview", "Overview", NavTarget::Placeholder),
    NavigationEntry::new("config", "Runtime config", NavTarget::Panel(PanelKind::RuntimeConfig)),
    NavigationEntry::new("clickhouse", "ClickHouse🏚️", NavTarget::Panel(PanelKind::ClickhouseQueries)),
    NavigationEntry::new("tracing", "Tracing 🔎", NavTarget::Placeholder),
    NavigationEntry::new("auditlog", "Audit log", NavTarget::Placeholder),
    NavigationEntry::new("ratelimits", "Rate Limits 📉", NavTarget::Placeholder),
];

static STANDARD: LazyLock<NavigationRegistry> = LazyLock::new(|| {
    NavigationRegistry::new(&NAV_ITEMS).unwrap_or_else(|e| panic!("invalid NAV_ITEMS: {e}"))
});

/// Errors found while validating a list of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("navigation registry has no entries")]
    Empty,
    #[error("navigation entry at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("navigation id {id:?} is used at positions {first} and {second}")]
    DuplicateId {
        id: &'static str,
        first: usize,
        second: usize,
    },
}

/// Validated, immutable view over an ordered list of navigation entries.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    entries: &'static [NavigationEntry],
}

impl NavigationRegistry {
    /// Validate `entries` and wrap them.
    pub fn new(entries: &'static [NavigationEntry]) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen: HashMap<&'static str, usize> = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(RegistryError::EmptyId { index });
            }
            if let Some(&first) = seen.get(entry.id) {
                return Err(RegistryError::DuplicateId {
                    id: entry.id,
                    first,
                    second: index,
                });
            }
            seen.insert(entry.id, index);
        }

        Ok(Self { entries })
    }

    /// The process-wide registry built from [`NAV_ITEMS`].
    pub fn standard() -> &'static NavigationRegistry {
        &STANDARD
    }

    pub fn entries(&self) -> &'static [NavigationEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static NavigationEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&'static NavigationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Menu position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.id)
    }

    /// Index after `index`, wrapping to the first entry.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Index before `index`, wrapping to the last entry.
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 || index >= self.entries.len() {
            self.entries.len() - 1
        } else {
            index - 1
        }
    }
}
