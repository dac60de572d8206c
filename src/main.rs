use emsim::analysis::sweep::default_speed_sweep;
use emsim::config::aircraft::DemoJet;
use emsim::config::simulation::SimulationConfig;
use emsim::output::charts::{render_flight_profile, render_speed_sweep};
use emsim::output::console::{log_summary, ConsoleReporter};
use emsim::output::csv_writer::{write_sweep_file, write_trajectory_file};
use emsim::sim::Simulator;
use log::info;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    static AIRCRAFT: DemoJet = DemoJet;
    let config = SimulationConfig::default();
    info!(
        "Simulating {} steps of {}s from {} m/s at {} m",
        config.total_steps, config.dt, config.initial_velocity, config.initial_altitude
    );

    let trajectory = Simulator::new(&AIRCRAFT, config).run_with(ConsoleReporter)?;

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    write_trajectory_file(&output_dir.join("simulation_data.csv"), &trajectory)?;
    render_flight_profile(&output_dir.join("flight_profile.svg"), &trajectory)?;

    let sweep = default_speed_sweep(&AIRCRAFT)?;
    write_sweep_file(&output_dir.join("speed_sweep.csv"), &sweep)?;
    render_speed_sweep(&output_dir.join("speed_sweep.svg"), &sweep)?;

    log_summary(&AIRCRAFT, &trajectory);

    Ok(())
}
