// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Preset selection durations offered from a chosen start slot, in
/// minutes.
pub const OFFERED_DURATIONS: [u16; 3] = [60, 90, 120];

/// Business-rule configuration for the selection engine.
///
/// The gap rule has shipped both enabled and disabled; it stays a
/// configuration flag so either behavior is a one-line choice and the
/// machinery (and its call sites) survive intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Minimum bookable duration in minutes.
    pub min_duration_minutes: u16,
    /// Whether a selection leaving an exact 30-minute sliver next to an
    /// existing booking is rejected.
    pub enforce_gap_rule: bool,
}

impl GridConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `min_duration_minutes` - Minimum bookable duration
    /// * `enforce_gap_rule` - Whether the 30-minute gap rule blocks validity
    #[must_use]
    pub const fn new(min_duration_minutes: u16, enforce_gap_rule: bool) -> Self {
        Self {
            min_duration_minutes,
            enforce_gap_rule,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(60, true)
    }
}
