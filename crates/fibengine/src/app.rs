//! Application entry point and dispatch.

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use fibengine_cli::output::write_to_file;
use fibengine_cli::{CLIResultPresenter, ClientResult, ResultPresenter};
use fibengine_core::{Algorithm, FibError};
use fibengine_device::{DeviceError, FibDevice, Reading};

use crate::config::AppConfig;
use crate::verify::verify_reading;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibengine_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let algorithms = config.algorithms()?;
    let device = FibDevice::new();
    check_index(&device, config.index)?;

    if config.clients > 1 {
        run_clients(config, &device, &algorithms)
    } else {
        run_single(config, &device, &algorithms)
    }
}

/// Reject an index beyond the device bound before any client runs.
pub fn check_index(device: &FibDevice, index: u64) -> Result<(), DeviceError> {
    let max = device.max_index();
    if index > max {
        return Err(DeviceError::IndexOutOfRange { index, max });
    }
    Ok(())
}

/// One device session: open, select, position, read.
pub fn query(
    device: &FibDevice,
    algorithm: Algorithm,
    index: u64,
    wait: bool,
) -> Result<Reading, DeviceError> {
    let mut handle = if wait {
        device.open_blocking()
    } else {
        device.open()?
    };
    handle.seek_to(algorithm.selector())?;
    handle.write()?;
    handle.seek_to(index)?;
    handle.read()
}

fn run_single(config: &AppConfig, device: &FibDevice, algorithms: &[Algorithm]) -> Result<()> {
    let readings = algorithms
        .iter()
        .map(|&algo| query(device, algo, config.index, false))
        .collect::<Result<Vec<_>, _>>()?;

    if readings.len() > 1 {
        analyze_comparison(&readings)?;
    }
    if config.verify {
        for reading in &readings {
            verify_reading(reading)?;
        }
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for reading in &readings {
        presenter.present_reading(reading, config.details);
        if config.quiet {
            break;
        }
    }
    if readings.len() > 1 {
        presenter.present_comparison(&readings);
    }

    if let (Some(path), Some(reading)) = (&config.output, readings.first()) {
        write_to_file(path, &reading.value)?;
    }

    Ok(())
}

fn run_clients(config: &AppConfig, device: &FibDevice, algorithms: &[Algorithm]) -> Result<()> {
    let results: Vec<ClientResult> = (0..config.clients)
        .into_par_iter()
        .map(|client| {
            let index = config.index.saturating_sub(client as u64);
            let algorithm = algorithms[client % algorithms.len()];
            ClientResult {
                client,
                index,
                outcome: query(device, algorithm, index, config.wait),
            }
        })
        .collect();

    let stats = device.stats();
    info!(
        opens = stats.opens,
        busy = stats.busy_rejections,
        reads = stats.reads,
        compute_ns = stats.compute_ns,
        "clients finished"
    );

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_clients(&results);

    if config.verify {
        for reading in results.iter().filter_map(|r| r.outcome.as_ref().ok()) {
            verify_reading(reading)?;
        }
    }

    Ok(())
}

/// Check that every reading of the same index carries the same digits.
pub fn analyze_comparison(readings: &[Reading]) -> Result<(), FibError> {
    let Some(first) = readings.first() else {
        return Ok(());
    };
    if readings.iter().any(|r| r.value != first.value) {
        return Err(FibError::Mismatch(first.index));
    }
    Ok(())
}
