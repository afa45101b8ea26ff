//! In-memory simulation store using DashMap.

use crate::api::request_id::RequestId;
use crate::config::Config;
use bridge_core::{BridgePlan, Coordinates2D, Drone, Point3D};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// A completed planning run: inputs, parameters and the resulting plan.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRecord {
    pub simulation_id: u64,
    /// Correlation ID of the request that produced this run
    pub request_id: RequestId,
    pub base: Point3D,
    pub user: Coordinates2D,
    pub max_spacing: f64,
    pub step_size: f64,
    pub drones: Vec<Drone>,
    pub drone_positions: BridgePlan,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Listing entry without the trajectories.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub simulation_id: u64,
    pub request_id: RequestId,
    pub drone_count: usize,
    pub relay_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl From<&SimulationRecord> for SimulationSummary {
    fn from(record: &SimulationRecord) -> Self {
        Self {
            simulation_id: record.simulation_id,
            request_id: record.request_id.clone(),
            drone_count: record.drones.len(),
            relay_count: record.drone_positions.len(),
            started_at: record.started_at,
            finished_at: record.finished_at,
        }
    }
}

/// Application state - configuration plus stored simulations.
pub struct AppState {
    config: Config,
    simulations: DashMap<u64, SimulationRecord>,
    simulation_counter: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            simulations: DashMap::new(),
            simulation_counter: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reserve the next simulation ID.
    pub fn next_simulation_id(&self) -> u64 {
        self.simulation_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Store a finished simulation, evicting the oldest past the cap.
    pub fn insert_simulation(&self, record: SimulationRecord) {
        self.simulations.insert(record.simulation_id, record);

        let cap = self.config.max_simulations;
        if cap == 0 {
            return;
        }
        while self.simulations.len() > cap {
            let oldest = self.simulations.iter().map(|entry| *entry.key()).min();
            match oldest {
                Some(id) => {
                    self.simulations.remove(&id);
                    tracing::debug!(simulation_id = id, "Evicted simulation");
                }
                None => break,
            }
        }
    }

    pub fn get_simulation(&self, id: u64) -> Option<SimulationRecord> {
        self.simulations.get(&id).map(|r| r.value().clone())
    }

    /// Summaries ordered by ID.
    pub fn list_simulations(&self) -> Vec<SimulationSummary> {
        let mut summaries: Vec<SimulationSummary> = self
            .simulations
            .iter()
            .map(|r| SimulationSummary::from(r.value()))
            .collect();
        summaries.sort_by_key(|s| s.simulation_id);
        summaries
    }
}
