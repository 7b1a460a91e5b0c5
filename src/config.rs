// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Tunables shared by point location, search and smoothing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level navigation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Absolute tolerance for "effectively zero" lengths (default: 1e-6)
    pub epsilon: f64,

    /// Samples on the corner-rounding circle (default: 16)
    pub circle_samples: usize,

    /// Factor applied to the radius when pushing a start/goal point off a
    /// nearby vertex (default: 1.01)
    pub endpoint_push_factor: f64,

    /// Face steps before point location falls back to a scan (default: 1000)
    pub locate_max_steps: usize,

    pub astar: AStarConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            circle_samples: 16,
            endpoint_push_factor: 1.01,
            locate_max_steps: 1000,
            astar: AStarConfig::default(),
        }
    }
}

/// Face-graph search settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarConfig {
    /// Maximum number of faces to expand before giving up
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.circle_samples < 3 {
            return Err(ConfigError::Invalid(format!(
                "circle_samples must be at least 3, got {}",
                self.circle_samples
            )));
        }
        if self.endpoint_push_factor < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "endpoint_push_factor must be >= 1, got {}",
                self.endpoint_push_factor
            )));
        }
        if self.locate_max_steps == 0 {
            return Err(ConfigError::Invalid("locate_max_steps must be positive".into()));
        }
        Ok(())
    }
}
