//! Input event schema.
//!
//! Mirrors the per-sample mapping perf hands to script handlers. Every
//! field is optional so that partially resolved samples still merge into
//! the tree instead of failing.

use serde::Deserialize;

/// One sampled event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SampleEvent {
    /// Thread/process name
    #[serde(default)]
    pub comm: Option<String>,

    /// Stack frames, innermost (currently executing) first
    #[serde(default)]
    pub callchain: Option<Vec<CallchainEntry>>,

    /// Sampled symbol, used only when there is no call chain
    #[serde(default)]
    pub symbol: Option<String>,

    /// Module of the sampled symbol, used only when there is no call chain
    #[serde(default)]
    pub dso: Option<String>,
}

/// A single frame of a call chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallchainEntry {
    #[serde(default)]
    pub sym: Option<Symbol>,

    /// Module the frame belongs to
    #[serde(default)]
    pub dso: Option<String>,
}

/// Resolved symbol of a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Symbol {
    #[serde(default)]
    pub name: Option<String>,
}

impl SampleEvent {
    pub fn new(comm: impl Into<String>) -> Self {
        Self {
            comm: Some(comm.into()),
            ..Default::default()
        }
    }

    pub fn with_callchain(mut self, callchain: Vec<CallchainEntry>) -> Self {
        self.callchain = Some(callchain);
        self
    }

    pub fn with_symbol(mut self, symbol: Option<&str>, dso: Option<&str>) -> Self {
        self.symbol = symbol.map(str::to_string);
        self.dso = dso.map(str::to_string);
        self
    }
}

impl CallchainEntry {
    pub fn new(name: Option<&str>, dso: Option<&str>) -> Self {
        Self {
            sym: name.map(|n| Symbol {
                name: Some(n.to_string()),
            }),
            dso: dso.map(str::to_string),
        }
    }

    /// Resolved symbol name, if any
    pub fn symbol_name(&self) -> Option<&str> {
        self.sym.as_ref().and_then(|s| s.name.as_deref())
    }
}
