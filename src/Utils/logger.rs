use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::solution::Solution;
use chrono::Local;
use csv::Writer;
use simplelog::*;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::OnceLock;

static INSTALLED_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

/// log level from its name; None means logging is switched off
pub fn parse_log_level(level: &str) -> Result<Option<LevelFilter>, FDError> {
    match level.trim().to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        other => Err(FDError::InvalidConfiguration(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            other
        ))),
    }
}

/// log_YYYY-mm-dd_HH-MM-SS.txt
pub fn timestamped_log_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Install terminal (and optionally file) logging. Default level is info.
/// Returns Ok(false) if logging is off or a logger was already installed;
/// in that case the log file is not touched. An existing log file is appended to.
pub fn init_logger(level: Option<String>, log_file: Option<String>) -> Result<bool, FDError> {
    let level = match level {
        Some(name) => match parse_log_level(&name)? {
            Some(level) => level,
            None => return Ok(false),
        },
        None => LevelFilter::Info,
    };
    if INSTALLED_LEVEL.get().is_some() {
        return Ok(false);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(filename) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(&filename)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    if CombinedLogger::init(loggers).is_err() {
        return Ok(false);
    }
    let _ = INSTALLED_LEVEL.set(level);
    Ok(true)
}

/// Tab-separated text file with columns x, u and optionally u_exact.
pub fn save_solution_to_file(
    solution: &Solution,
    exact: Option<&dyn Fn(f64) -> f64>,
    filename: &str,
) -> Result<(), FDError> {
    let mut file = File::create(filename)?;
    let mut headers = vec!["x", "u"];
    if exact.is_some() {
        headers.push("u_exact");
    }
    writeln!(file, "{}", headers.join("\t"))?;
    for (x, u) in solution.points() {
        let mut row_data = vec![x.to_string(), u.to_string()];
        if let Some(exact) = exact {
            row_data.push(exact(x).to_string());
        }
        writeln!(file, "{}", row_data.join("\t"))?;
    }
    Ok(())
}

/// CSV file with columns x, u and optionally u_exact.
pub fn save_solution_to_csv(
    solution: &Solution,
    exact: Option<&dyn Fn(f64) -> f64>,
    filename: &str,
) -> Result<(), FDError> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    let mut headers = vec!["x", "u"];
    if exact.is_some() {
        headers.push("u_exact");
    }
    writer.write_record(&headers)?;
    for (x, u) in solution.points() {
        let mut row_data = vec![x.to_string(), u.to_string()];
        if let Some(exact) = exact {
            row_data.push(exact(x).to_string());
        }
        writer.write_record(&row_data)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::FD_BVP::direct_solver::solve_direct;
    use crate::numerical::FD_BVP::solution::BoundaryConditions;
    use tempfile::tempdir;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Some(LevelFilter::Info));
        assert_eq!(parse_log_level("DEBUG").unwrap(), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level("off").unwrap(), None);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_timestamped_name() {
        let name = timestamped_log_name();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_logging_off() {
        assert!(!init_logger(Some("none".to_string()), None).unwrap());
    }

    // the only test in this crate that installs a global logger
    #[test]
    fn test_log_file_written_and_kept_on_second_init() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let filename = path.to_str().unwrap().to_string();
        assert!(init_logger(Some("info".to_string()), Some(filename.clone())).unwrap());
        log::info!("first solve finished");
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("first solve finished"));

        assert!(!init_logger(Some("info".to_string()), Some(filename)).unwrap());
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(second.starts_with(&first));
    }

    #[test]
    fn test_save_solution_to_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.csv");
        let bc = BoundaryConditions::new(0.0, 1.0);
        let solution = solve_direct(3, &|_x: f64| 0.0, &bc);
        let exact: &dyn Fn(f64) -> f64 = &|x: f64| x;
        save_solution_to_csv(&solution, Some(exact), path.to_str().unwrap()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["x", "u", "u_exact"]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][0].parse::<f64>().unwrap(), 1.0);
        assert_eq!(rows[4][1].parse::<f64>().unwrap(), 1.0);
    }

    #[test]
    fn test_save_solution_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.txt");
        let bc = BoundaryConditions::new(2.0, 2.0);
        let solution = solve_direct(2, &|_x: f64| 0.0, &bc);
        save_solution_to_file(&solution, None, path.to_str().unwrap()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x\tu");
        assert_eq!(lines.len(), 5);
    }
}
