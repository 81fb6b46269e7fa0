//! Machine configuration

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolSet;
use crate::timing::RevealTiming;

/// Full machine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Starting credit balance
    pub initial_credits: u32,
    /// Number of result positions per roll
    pub reel_count: u8,
    /// Reveal timing
    pub timing: RevealTiming,
    /// Glyphs drawn into results
    pub symbols: SymbolSet,
}

impl MachineConfig {
    /// Standard widget configuration: 10 credits, 3 reels, normal timing
    pub fn standard() -> Self {
        Self {
            initial_credits: 10,
            reel_count: 3,
            timing: RevealTiming::normal(),
            symbols: SymbolSet::standard(),
        }
    }

    /// Studio configuration: instant reveals for demos and deterministic runs
    pub fn studio() -> Self {
        Self {
            timing: RevealTiming::studio(),
            ..Self::standard()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reel_count == 0 {
            return Err(ConfigError::NoReels);
        }
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("reel count must be at least 1")]
    NoReels,

    #[error("symbol set is empty")]
    NoSymbols,
}
