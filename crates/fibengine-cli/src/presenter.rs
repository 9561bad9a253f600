//! CLI result presenter.

use fibengine_device::Reading;

use crate::interfaces::{ClientResult, ResultPresenter};
use crate::output::{format_duration, format_number, format_result};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_reading(&self, reading: &Reading, details: bool) {
        if self.quiet {
            println!("{}", reading.value);
            return;
        }

        println!("{}", ui::header(&format!("F({})", format_number(reading.index))));
        println!("Algorithm: {}", reading.algorithm);
        println!("Duration: {}", format_duration(reading.elapsed));

        if details {
            println!("Elapsed: {} ns", reading.elapsed_ns());
            println!("Result digits: {}", reading.value.len());
        }

        println!(
            "F({}) = {}",
            format_number(reading.index),
            format_result(&reading.value, self.verbose)
        );
    }

    fn present_comparison(&self, readings: &[Reading]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for reading in readings {
            println!(
                "  {:<20} {:>12}",
                reading.algorithm.name(),
                format_duration(reading.elapsed),
            );
        }
    }

    fn present_clients(&self, results: &[ClientResult]) {
        let ok = results.iter().filter(|r| r.outcome.is_ok()).count();

        for result in results {
            match &result.outcome {
                Ok(reading) if self.quiet => println!("{}", reading.value),
                Ok(reading) => println!(
                    "{} client {:>3} F({}) = {} ({})",
                    ui::tag(result.status(), true),
                    result.client,
                    format_number(result.index),
                    format_result(&reading.value, self.verbose),
                    format_duration(reading.elapsed),
                ),
                Err(e) if !self.quiet => println!(
                    "{} client {:>3} F({}): {e}",
                    ui::tag(result.status(), false),
                    result.client,
                    format_number(result.index),
                ),
                Err(_) => {}
            }
        }

        if !self.quiet {
            println!("{:-<60}", "");
            println!("{ok}/{} clients completed", results.len());
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
