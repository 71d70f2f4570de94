// thermotrack_cli/src/app.rs

use crate::cli::Cli;
use crate::config::{load_config, AppConfig};
use crate::error::CliError;
use crate::input::{log_name, validate_log_path};
use crate::report::TextReport;
use log::{info, warn};
use std::io::{self, Write};
use thermotrack_core::prelude::{
    align_and_interpolate, render_scene, PoseLogParser, TemperatureLogParser, TemperatureSeries,
    ThermotrackError, Trajectory,
};

/// Runs the tool, writing the report to stdout.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

pub fn run_with_output<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    if cli.print_config {
        write!(out, "{}", toml::to_string_pretty(&config)?)?;
    }
    run_with_config(cli, &config, out)
}

pub fn run_with_config<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> Result<(), CliError> {
    // Both logs are checked up front so a bad temperature path fails before any work.
    validate_log_path(&cli.log_pose, "--log-pose")?;
    if let Some(path) = &cli.log_temp {
        validate_log_path(path, "--log-temp")?;
    }

    let name = log_name(&cli.log_pose);
    info!("Loading pose log from: {}", cli.log_pose.display());
    let poses = PoseLogParser::with_options(config.parser).parse_file(&cli.log_pose)?;
    writeln!(out, "Trajectories from file {}: {}", name, poses.summary)?;
    if poses.records.is_empty() {
        warn!("No complete pose records in {}", cli.log_pose.display());
    }

    let stride = usize::try_from(cli.stride).map_err(|_| ThermotrackError::InvalidStride)?;
    let trajectory = Trajectory::from_poses(name, poses.records, stride)?;

    let alignment = match &cli.log_temp {
        Some(path) => {
            info!("Loading temperature log from: {}", path.display());
            let readings = TemperatureLogParser::new().parse_file(path)?;
            let series = TemperatureSeries::new(trajectory.name.clone(), readings.records);
            writeln!(
                out,
                "Temperatures from file {}: {}",
                series.name, readings.summary
            )?;
            Some(align_and_interpolate(
                trajectory.poses(),
                &series.readings,
                &config.alignment,
            ))
        }
        None => None,
    };

    let mut report = TextReport::default();
    render_scene(&trajectory, alignment.as_ref(), &config.render, &mut report);
    write!(out, "{}", report.render())?;
    writeln!(out, "-- END --")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    const POSE_LOG: &str = "\
header:
  seq: 1
  stamp:
    secs: 10
    nsecs: 0
  frame_id: map
pose:
  position:
    x: 0.0
    y: 0.0
    z: 0.0
  orientation:
    x: 0.0
    y: 0.0
    z: 0.0
    w: 1.0
---
header:
  seq: 2
  stamp:
    secs: 11
    nsecs: 0
  frame_id: map
pose:
  position:
    x: 3.0
    y: 4.0
    z: 0.0
  orientation:
    x: 0.0
    y: 0.0
    z: 0.0
    w: 1.0
---
";

    const TEMPERATURE_LOG: &str = "\
header:
  seq: 1
  stamp:
    secs: 10
    nsecs: 1000
  frame_id: probe
temperature: 20.0
variance: 0.1
---
header:
  seq: 2
  stamp:
    secs: 11
    nsecs: 0
  frame_id: probe
temperature: 30.0
variance: 0.1
---
";

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("thermotrack_app_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn cli(pose: &Path, temp: Option<&Path>, stride: u64) -> Cli {
        Cli {
            log_pose: pose.to_path_buf(),
            log_temp: temp.map(Path::to_path_buf),
            stride,
            config: None,
            print_config: false,
        }
    }

    fn run_to_string(cli: &Cli) -> Result<String, CliError> {
        let mut out = Vec::new();
        run_with_config(cli, &AppConfig::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_pose_only_report() {
        let pose = write_fixture("pose_only.txt", POSE_LOG);
        let output = run_to_string(&cli(&pose, None, 1)).unwrap();
        let stem = pose.file_stem().unwrap().to_string_lossy().into_owned();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], format!("Trajectories from file {}: 2 valid points of 2", stem));
        assert!(lines.contains(&"Path: 2 points, length 5.000 m"));
        assert!(lines.contains(&"Number of orientations drawn: 2"));
        assert!(!output.contains("Matched temperature points"));
        assert_eq!(lines.last(), Some(&"-- END --"));
        std::fs::remove_file(pose).unwrap();
    }

    #[test]
    fn test_report_with_temperatures() {
        let pose = write_fixture("pose_temp.txt", POSE_LOG);
        let temp = write_fixture("temp.txt", TEMPERATURE_LOG);
        let output = run_to_string(&cli(&pose, Some(&temp), 2)).unwrap();
        let stem = pose.file_stem().unwrap().to_string_lossy().into_owned();

        // The series shares the trajectory's name.
        assert!(output.contains(&format!("Temperatures from file {}: 2 valid points of 2", stem)));
        assert!(output.contains("2 valid points of 2"));
        assert!(output.contains("Number of orientations drawn: 1"));
        assert!(output.contains("Matched temperature points: 2"));
        assert!(output.contains("Interpolated temperature points: 10"));
        assert!(output.contains("Temperature range: 20.00 .. 30.00"));
        std::fs::remove_file(pose).unwrap();
        std::fs::remove_file(temp).unwrap();
    }

    #[test]
    fn test_missing_temperature_log_fails_before_parsing() {
        let pose = write_fixture("pose_missing_temp.txt", POSE_LOG);
        let missing = std::env::temp_dir().join("thermotrack_app_no_such_temp.txt");
        let err = run_to_string(&cli(&pose, Some(&missing), 1)).unwrap_err();
        assert!(matches!(err, CliError::MissingLog { flag: "--log-temp", .. }));
        std::fs::remove_file(pose).unwrap();
    }

    #[test]
    fn test_log_without_headers_still_reports() {
        let pose = write_fixture("pose_empty.txt", "nothing to see\n");
        let output = run_to_string(&cli(&pose, None, 1)).unwrap();
        assert!(output.contains("0 valid points of 0"));
        assert!(output.contains("Path: 0 points"));
        std::fs::remove_file(pose).unwrap();
    }
}
