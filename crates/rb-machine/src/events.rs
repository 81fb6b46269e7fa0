//! Machine transition events published to subscribers

use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

/// A state transition of the machine.
///
/// Published together with a fresh [`MachineSnapshot`](crate::MachineSnapshot)
/// so subscribers never need to read back into the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MachineEvent {
    /// A roll consumed a credit and started spinning
    SpinStarted { credits_remaining: u32 },
    /// The scheduled reveal fired and populated results
    RevealCompleted { results: Vec<Symbol> },
    /// The session was cashed out and the machine zeroed
    CashedOut { collected: u32 },
    /// Results were injected directly (scripted/demo outcome)
    ResultsSet { results: Vec<Symbol> },
}

impl MachineEvent {
    /// Stable name for logging and display
    pub fn name(&self) -> &'static str {
        match self {
            Self::SpinStarted { .. } => "spin_started",
            Self::RevealCompleted { .. } => "reveal_completed",
            Self::CashedOut { .. } => "cashed_out",
            Self::ResultsSet { .. } => "results_set",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(
            MachineEvent::SpinStarted { credits_remaining: 9 }.name(),
            "spin_started"
        );
        assert_eq!(MachineEvent::CashedOut { collected: 0 }.name(), "cashed_out");
    }

    #[test]
    fn test_event_serde_tagging() {
        let event = MachineEvent::SpinStarted { credits_remaining: 9 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"spin_started""#));
        let back: MachineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_reveal_event_carries_results() {
        let results = vec![Symbol::new("🍒"), Symbol::new("🍋"), Symbol::new("🍊")];
        let event = MachineEvent::RevealCompleted { results: results.clone() };
        let json = serde_json::to_string(&event).unwrap();
        let back: MachineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MachineEvent::RevealCompleted { results });
    }
}
