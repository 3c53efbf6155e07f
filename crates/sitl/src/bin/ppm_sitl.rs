//! Host simulation of the PPM encoder.
//!
//! Type commands on stdin (`C3 1750`, `A2 4000`, `R`); replies are printed
//! to stdout and the channel display is redrawn as text bars whenever it
//! changes.
//!
//! Usage:
//!   cargo run -p pico_ppm_sitl --bin ppm_sitl -- [OPTIONS]
//!
//! Options:
//!   --period-ms <MS>  Control loop period, 0 = as fast as possible (default: 20)
//!   --pin <N>         PPM output pin (default: 9)
//!   --quiet           Do not draw the channel display

use std::env;
use std::io::Write;
use std::process;

use pico_ppm::platform::traits::UartConfig;
use pico_ppm::{ControlConfig, ControlTask};
use pico_ppm_sitl::{SitlError, SitlPpm, SitlTimeSource, SitlUart, TerminalDisplay};
use tokio::io::BufReader;

struct Args {
    period_ms: u32,
    pin: u8,
    quiet: bool,
}

fn parse_args() -> Result<Args, SitlError> {
    let mut args = Args {
        period_ms: 20,
        pin: 9,
        quiet: false,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--period-ms" => {
                i += 1;
                args.period_ms = parse_value(&raw, i, "period-ms")?;
            }
            "--pin" => {
                i += 1;
                args.pin = parse_value(&raw, i, "pin")?;
            }
            "--quiet" => args.quiet = true,
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                return Err(SitlError::InvalidArgument(format!("unknown option: {other}")));
            }
        }
        i += 1;
    }

    Ok(args)
}

fn parse_value<T: std::str::FromStr>(raw: &[String], i: usize, name: &str) -> Result<T, SitlError> {
    let value = raw
        .get(i)
        .ok_or_else(|| SitlError::InvalidArgument(format!("--{name} requires a value")))?;
    value
        .parse()
        .map_err(|_| SitlError::InvalidArgument(format!("invalid value for --{name}: {value}")))
}

fn print_usage() {
    eprintln!(
        "Usage: ppm_sitl [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --period-ms <MS>  Control loop period, 0 = as fast as possible (default: 20)\n\
         \x20 --pin <N>         PPM output pin (default: 9)\n\
         \x20 --quiet           Do not draw the channel display\n\
         \x20 -h, --help        Show this help"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), SitlError> {
    let config = ControlConfig {
        ppm_pin: args.pin,
        uart: UartConfig::default(),
        loop_period_ms: args.period_ms,
        ..Default::default()
    };

    let uart = SitlUart::new(config.uart);
    let rx = uart.rx_handle();
    let time = SitlTimeSource::new();
    let mut task = ControlTask::new(config, uart, SitlPpm::new(), TerminalDisplay::new(), time.clone());

    let begun = task.begin();
    print_console(&mut task)?;
    begun?;

    // Feed stdin lines into the simulated UART
    tokio::spawn(async move {
        if let Err(e) = rx.forward_lines(BufReader::new(tokio::io::stdin())).await {
            eprintln!("stdin error: {e}");
        }
    });

    // A zero period still yields to the stdin task between ticks
    let period = tokio::time::Duration::from_millis(u64::from(args.period_ms.max(1)));
    let mut interval = tokio::time::interval(period);
    let wall_start = std::time::Instant::now();
    let mut shown_version = 0;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                println!("\nShutdown requested.");
                break;
            }
            _ = interval.tick() => {
                time.set_us(wall_start.elapsed().as_micros() as u64);

                if let Err(e) = task.tick() {
                    eprintln!("Tick error: {e}");
                }
                print_console(&mut task)?;

                if !args.quiet && task.display().version() != shown_version {
                    shown_version = task.display().version();
                    for row in task.display().frame() {
                        println!("{row}");
                    }
                    println!();
                }
            }
        }
    }

    let stats = task.stats();
    println!(
        "Simulation complete. {} ticks, avg {} us, max {} us, {} over budget",
        stats.execution_count, stats.avg_execution_us, stats.max_execution_us, stats.deadline_misses
    );
    Ok(())
}

fn print_console(
    task: &mut ControlTask<SitlUart, SitlPpm, TerminalDisplay, SitlTimeSource>,
) -> Result<(), SitlError> {
    let tx = task.uart_mut().drain_tx();
    if !tx.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&tx)?;
        stdout.flush()?;
    }
    Ok(())
}
