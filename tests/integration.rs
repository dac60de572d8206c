use approx::assert_abs_diff_eq;
use emsim::config::aircraft::DemoJet;
use emsim::config::simulation::SimulationConfig;
use emsim::fsm::flight_phases::FlightPhase;
use emsim::models::Trajectory;
use emsim::output::charts::render_flight_profile;
use emsim::output::csv_writer::write_trajectory_file;
use emsim::physics::energy::{kinetic_energy, potential_energy};
use emsim::physics::turning::{turn_radius, turn_rate};
use emsim::sim::Simulator;
use std::fs;

fn default_run() -> Trajectory {
    static AIRCRAFT: DemoJet = DemoJet;
    Simulator::new(&AIRCRAFT, SimulationConfig::default())
        .run()
        .expect("default scenario has nonzero mass and velocity")
}

#[test]
fn produces_one_record_per_step_in_time_order() {
    let trajectory = default_run();

    assert_eq!(trajectory.len(), 60);
    for (i, record) in trajectory.records().iter().enumerate() {
        assert_eq!(record.time, i as u32);
    }
}

#[test]
fn altitude_climbs_then_holds() {
    let trajectory = default_run();
    let altitudes = trajectory.altitudes();

    for (step, altitude) in altitudes.iter().enumerate().take(20) {
        assert_abs_diff_eq!(*altitude, 2000.0 + 10.0 * (step as f64 + 1.0));
    }
    for altitude in &altitudes[20..] {
        assert_abs_diff_eq!(*altitude, 2200.0);
    }
    assert_eq!(trajectory.peak_altitude(), Some(2200.0));
}

#[test]
fn angle_changes_only_during_turn() {
    let trajectory = default_run();

    for record in trajectory.records() {
        match record.time {
            20..=39 => {
                assert_eq!(record.phase, FlightPhase::Turn);
                let expected = turn_rate(&DemoJet, record.velocity).unwrap();
                assert_abs_diff_eq!(record.angle_change, expected, epsilon = 1e-15);
                assert_abs_diff_eq!(
                    record.angle_change,
                    DemoJet::C_L / (record.velocity * DemoJet::C_D),
                    epsilon = 1e-15
                );
            }
            t => {
                let expected = if t < 20 { FlightPhase::Climb } else { FlightPhase::Cruise };
                assert_eq!(record.phase, expected);
                assert_eq!(record.angle_change, 0.0);
            }
        }
    }
}

#[test]
fn velocity_increases_every_step_towards_terminal_velocity() {
    let trajectory = default_run();
    let velocities = trajectory.velocities();

    assert_abs_diff_eq!(velocities[0], 301.91, epsilon = 1e-9);
    assert!(velocities.windows(2).all(|w| w[1] > w[0]));
    // Drag balances thrust at sqrt(2 * 20000 / 0.02) m/s.
    assert!(velocities.iter().all(|v| *v < 2_000_000.0_f64.sqrt()));
}

#[test]
fn derived_values_come_from_post_update_state() {
    let trajectory = default_run();

    for record in trajectory.records() {
        assert_eq!(record.kinetic_energy, kinetic_energy(&DemoJet, record.velocity));
        assert_eq!(record.potential_energy, potential_energy(&DemoJet, record.altitude));
        assert_eq!(record.turn_radius, turn_radius(&DemoJet, record.velocity));
    }
}

#[test]
fn aligned_sequences_have_equal_length() {
    let trajectory = default_run();
    let n = trajectory.len();

    assert_eq!(trajectory.times().len(), n);
    assert_eq!(trajectory.velocities().len(), n);
    assert_eq!(trajectory.altitudes().len(), n);
    assert_eq!(trajectory.kinetic_energies().len(), n);
    assert_eq!(trajectory.potential_energies().len(), n);
    assert_eq!(trajectory.turn_radii().len(), n);
    assert_eq!(trajectory.angle_changes().len(), n);
}

#[test]
fn writes_csv_and_chart() -> Result<(), Box<dyn std::error::Error>> {
    let trajectory = default_run();
    let output_dir = tempfile::tempdir()?;

    let csv_path = output_dir.path().join("simulation_data.csv");
    write_trajectory_file(&csv_path, &trajectory)?;
    let csv = fs::read_to_string(&csv_path)?;
    assert_eq!(csv.lines().count(), 61);

    let svg_path = output_dir.path().join("flight_profile.svg");
    render_flight_profile(&svg_path, &trajectory)?;
    let svg = fs::read_to_string(&svg_path)?;
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Velocity vs Time"));

    Ok(())
}
