extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{ppm, Bailout, Config, Progress, ProgressBar, RenderError, Renderer, Schedule};
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SEQUENTIAL: &str = "sequential";
const BAILOUT: &str = "bailout";
const QUIET: &str = "quiet";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.ppm")
                .help("Output file; .ppm is written directly, other extensions via the image crate"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("4000x3000")
                .validator(|s| {
                    match parse_pair::<usize>(&s, 'x') {
                        Some((w, h)) if w > u32::max_value() as usize || h > u32::max_value() as usize => {
                            Err("Image size is too large".to_string())
                        }
                        Some((w, h)) if w > 0 && h > 0 => match mandelbrot::planes::rgb_len(w, h) {
                            Some(_) => Ok(()),
                            None => Err("Image size is too large".to_string()),
                        },
                        Some(_) => Err("Image size must be at least 1x1".to_string()),
                        None => validate_pair::<usize>(&s, 'x', "Could not parse output image size"),
                    }
                })
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the parallel solver (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Iterations after which a point is presumed inside the set"),
        )
        .arg(
            Arg::with_name(BAILOUT)
                .required(false)
                .long(BAILOUT)
                .short("b")
                .takes_value(true)
                .possible_values(&["modulus", "squared"])
                .default_value("modulus")
                .help("Escape test: exact |z| <= 2, or the cheaper |z|^2 <= 4"),
        )
        .arg(
            Arg::with_name(SEQUENTIAL)
                .long(SEQUENTIAL)
                .help("Render on one thread, row by row, streaming to the output"),
        )
        .arg(
            Arg::with_name(QUIET)
                .long(QUIET)
                .short("q")
                .help("Do not draw a progress bar"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> Config {
    // The validators above have already vetted every value.
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair(s, 'x'))
        .unwrap_or((mandelbrot::config::WIDTH, mandelbrot::config::HEIGHT));
    let defaults = Config::with_size(width, height);
    Config {
        max_iterations: matches
            .value_of(ITERATIONS)
            .and_then(|s| usize::from_str(s).ok())
            .unwrap_or(defaults.max_iterations),
        threads: matches
            .value_of(THREADS)
            .and_then(|s| usize::from_str(s).ok())
            .unwrap_or(defaults.threads),
        bailout: match matches.value_of(BAILOUT) {
            Some("squared") => Bailout::NormSqr,
            _ => Bailout::Modulus,
        },
        schedule: if matches.is_present(SEQUENTIAL) {
            Schedule::Sequential
        } else {
            Schedule::Parallel
        },
        ..defaults
    }
}

/// The sequential schedule on a PPM target never holds the whole
/// image: rows go straight from the renderer to the file.
fn stream<P: Progress>(
    renderer: &Renderer,
    config: &Config,
    output: &str,
    progress: &mut P,
) -> Result<(), RenderError> {
    let mut out = ppm::create(output)?;
    ppm::write_header(&mut out, config.width, config.height)?;
    renderer.stream(&mut out, progress)?;
    out.flush()?;
    Ok(())
}

fn run(config: &Config, output: &str, quiet: bool) -> Result<(), RenderError> {
    let renderer = Renderer::new(config)?;
    let started = Instant::now();
    info!(
        "rendering {}x{} to {} ({:?})",
        config.width, config.height, output, config.schedule
    );

    if config.schedule == Schedule::Sequential && ppm::is_ppm(output) {
        if quiet {
            stream(&renderer, config, output, &mut ())?;
        } else {
            let mut bar = ProgressBar::new(io::stderr(), config.bar_width);
            stream(&renderer, config, output, &mut bar)?;
        }
    } else {
        if !quiet {
            eprint!("Generating image...");
        }
        let pixels = renderer.render()?;
        debug!("rendered {} bytes in {:?}", pixels.len(), started.elapsed());
        ppm::save(output, config.width, config.height, &pixels)?;
        if !quiet {
            eprintln!(" done.");
        }
    }

    info!("wrote {} in {:?}", output, started.elapsed());
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    let config = config(&matches);
    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.ppm");

    if let Err(e) = run(&config, output, matches.is_present(QUIET)) {
        error!("render of {} failed: {}", output, e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
