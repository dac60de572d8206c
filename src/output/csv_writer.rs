use crate::analysis::sweep::SweepPoint;
use crate::models::Trajectory;
use crate::sim::SimulationErrors;
use csv::Writer;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

fn write_rows<W: io::Write, R: Serialize>(
    writer: W,
    rows: impl IntoIterator<Item = R>,
) -> Result<(), SimulationErrors> {
    let mut writer = Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectory<W: io::Write>(
    writer: W,
    trajectory: &Trajectory,
) -> Result<(), SimulationErrors> {
    write_rows(writer, trajectory)
}

pub fn write_trajectory_file(path: &Path, trajectory: &Trajectory) -> Result<(), SimulationErrors> {
    write_trajectory(File::create(path)?, trajectory)?;
    info!("Simulation data has been written to {}", path.display());
    Ok(())
}

pub fn write_sweep_file(path: &Path, points: &[SweepPoint]) -> Result<(), SimulationErrors> {
    write_rows(File::create(path)?, points)?;
    info!("Speed sweep has been written to {}", path.display());
    Ok(())
}
