use crate::fsm::flight_phases::FlightPhase;
use serde::Serialize;

/// Mutable trajectory of the aircraft, owned by the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryState {
    pub elapsed_time: u32, // s
    pub velocity: f64,     // m/s
    pub altitude: f64,     // m
}

impl TrajectoryState {
    pub fn new(velocity: f64, altitude: f64) -> Self {
        TrajectoryState {
            elapsed_time: 0,
            velocity,
            altitude,
        }
    }
}

/// Derived values of one simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    #[serde(rename = "Time (s)")]
    pub time: u32,
    #[serde(rename = "Phase")]
    pub phase: FlightPhase,
    #[serde(rename = "Velocity (m/s)")]
    pub velocity: f64,
    #[serde(rename = "Altitude (m)")]
    pub altitude: f64,
    #[serde(rename = "Kinetic Energy (J)")]
    pub kinetic_energy: f64,
    #[serde(rename = "Potential Energy (J)")]
    pub potential_energy: f64,
    #[serde(rename = "Turn Radius (m)")]
    pub turn_radius: f64,
    #[serde(rename = "Angle Change (rad)")]
    pub angle_change: f64,
}

impl StepRecord {
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

/// Time-ordered log of step records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    records: Vec<StepRecord>,
}

impl Trajectory {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            records: Vec::with_capacity(steps),
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        debug_assert!(
            self.records.last().map_or(true, |last| last.time < record.time),
            "step records must be strictly time-ordered"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|r| r.time as f64)
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.column(|r| r.velocity)
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.column(|r| r.altitude)
    }

    pub fn kinetic_energies(&self) -> Vec<f64> {
        self.column(|r| r.kinetic_energy)
    }

    pub fn potential_energies(&self) -> Vec<f64> {
        self.column(|r| r.potential_energy)
    }

    pub fn turn_radii(&self) -> Vec<f64> {
        self.column(|r| r.turn_radius)
    }

    pub fn angle_changes(&self) -> Vec<f64> {
        self.column(|r| r.angle_change)
    }

    pub fn peak_altitude(&self) -> Option<f64> {
        self.records.iter().map(|r| r.altitude).reduce(f64::max)
    }

    fn column<F: Fn(&StepRecord) -> f64>(&self, f: F) -> Vec<f64> {
        self.records.iter().map(f).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
