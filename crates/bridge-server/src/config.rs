//! Server configuration from environment.

use bridge_core::{IdlePolicy, PlannerConfig, DEFAULT_MAX_SPACING, DEFAULT_STEP_SIZE};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Prefix for all planning routes
    pub base_api_path: String,
    /// Used when a request does not set `max_spacing`
    pub max_spacing: f64,
    /// Used when a request does not set `step_size`
    pub step_size: f64,
    pub idle_policy: IdlePolicy,
    /// Oldest simulations are evicted past this many (0 = unbounded)
    pub max_simulations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            base_api_path: "/api/uav-service".to_string(),
            max_spacing: DEFAULT_MAX_SPACING,
            step_size: DEFAULT_STEP_SIZE,
            idle_policy: IdlePolicy::Omit,
            max_simulations: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("BRIDGE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            base_api_path: env::var("BRIDGE_BASE_API_PATH")
                .map(|s| normalize_path(&s))
                .unwrap_or(defaults.base_api_path),
            max_spacing: env_positive_f64("BRIDGE_MAX_SPACING").unwrap_or(defaults.max_spacing),
            step_size: env_positive_f64("BRIDGE_STEP_SIZE").unwrap_or(defaults.step_size),
            idle_policy: env::var("BRIDGE_IDLE_POLICY")
                .ok()
                .and_then(|s| IdlePolicy::parse(&s))
                .unwrap_or(defaults.idle_policy),
            max_simulations: env::var("BRIDGE_MAX_SIMULATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_simulations),
        }
    }

    /// Planner parameters, with per-request overrides applied.
    pub fn planner(&self, max_spacing: Option<f64>, step_size: Option<f64>) -> PlannerConfig {
        PlannerConfig {
            max_spacing: max_spacing.unwrap_or(self.max_spacing),
            step_size: step_size.unwrap_or(self.step_size),
            idle_policy: self.idle_policy,
        }
    }
}

fn env_positive_f64(key: &str) -> Option<f64> {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Leading slash, no trailing slash; empty means mounted at the root.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
