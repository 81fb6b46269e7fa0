//! Timing profiles for the delayed reveal

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reveal timing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast/Turbo mode
    Turbo,
    /// Studio mode (instant, for demos and deterministic runs)
    Studio,
    /// Custom timing via `scaled`
    Custom,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Delay between a roll and its reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Profile type
    pub profile: TimingProfile,
    /// Time from roll invocation to symbol reveal (ms)
    pub reveal_delay_ms: u64,
}

impl RevealTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            reveal_delay_ms: 4000,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            reveal_delay_ms: 800,
        }
    }

    /// Studio mode (instant reveal)
    pub fn studio() -> Self {
        Self {
            profile: TimingProfile::Studio,
            reveal_delay_ms: 0,
        }
    }

    /// Get timing for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Studio => Self::studio(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale the delay by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            reveal_delay_ms: (self.reveal_delay_ms as f64 * factor).round() as u64,
        }
    }

    /// Reveal delay as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_profiles() {
        let normal = RevealTiming::normal();
        let turbo = RevealTiming::turbo();
        let studio = RevealTiming::studio();

        assert_eq!(normal.reveal_delay_ms, 4000);
        assert!(turbo.reveal_delay_ms < normal.reveal_delay_ms);
        assert_eq!(studio.reveal_delay_ms, 0);
        assert!(studio.delay().is_zero());
    }

    #[test]
    fn test_from_profile_round_trip() {
        for profile in [TimingProfile::Normal, TimingProfile::Turbo, TimingProfile::Studio] {
            assert_eq!(RevealTiming::from_profile(profile).profile, profile);
        }
    }

    #[test]
    fn test_scaled() {
        let half = RevealTiming::normal().scaled(0.5);
        assert_eq!(half.profile, TimingProfile::Custom);
        assert_eq!(half.reveal_delay_ms, 2000);
    }
}
