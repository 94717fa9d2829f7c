/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Assembly configuration.

use serde::{Deserialize, Serialize};

/// Options recognized by the assembler.
///
/// Missing fields take their defaults, so `{}` and `{"normalize": false}`
/// deserialize to the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleOptions {
    /// Emit each fragment in its normalized form instead of its raw
    /// first-seen text.
    pub normalize: bool,
}

impl AssembleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable normalized fragment output.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}
