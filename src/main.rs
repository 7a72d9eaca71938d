//! Interactive EDF simulation front end.
//!
//! Prompts for a task count, then CPU time and period per task, runs the
//! simulation over one hyperperiod, and prints the event log followed by
//! the waiting-time summary.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use edf_sim::dispatching::{DispatchPolicy, EarliestDeadlineFirst};
use edf_sim::models::TaskDescriptor;
use edf_sim::sim::Simulator;

/// edf-sim: an Earliest-Deadline-First real-time scheduling simulator
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn prompt_u64(input: &mut impl BufRead, prompt: &str) -> Result<u64> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    line.trim()
        .parse()
        .with_context(|| format!("expected a positive integer, got {:?}", line.trim()))
}

fn read_tasks(input: &mut impl BufRead) -> Result<Vec<TaskDescriptor>> {
    let count = prompt_u64(input, "Enter the number of processes to schedule: ")?;

    let mut tasks = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let exec_time = prompt_u64(input, &format!("Enter the CPU time of process {id}: "))?;
        let period = prompt_u64(input, &format!("Enter the period of process {id}: "))?;
        tasks.push(TaskDescriptor::new(id as u32, exec_time, period));
    }
    Ok(tasks)
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        level,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut stdin = io::stdin().lock();
    let tasks = read_tasks(&mut stdin)?;

    let policy = EarliestDeadlineFirst;
    debug!("dispatch policy: {}", policy.description());
    let report = Simulator::with_policy(policy).run(&tasks)?;
    for event in &report.events {
        println!("{event}");
    }
    println!("{}", report.stats);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_tasks() {
        let mut input = Cursor::new("2\n1\n2\n1\n5\n");
        let tasks = read_tasks(&mut input).unwrap();
        assert_eq!(
            tasks,
            vec![TaskDescriptor::new(1, 1, 2), TaskDescriptor::new(2, 1, 5)]
        );
    }

    #[test]
    fn test_read_tasks_rejects_garbage() {
        let mut input = Cursor::new("not a number\n");
        assert!(read_tasks(&mut input).is_err());
    }
}
