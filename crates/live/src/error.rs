// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced by the refresh and preference layers.
#[derive(Debug, Error)]
pub enum LiveError {
    /// A preference payload could not be serialized.
    #[error("Preference serialization failed: {0}")]
    PreferenceSerialization(#[from] serde_json::Error),
}
