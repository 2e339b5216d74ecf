extern crate clap;
extern crate image;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use mandelbrot::{EscapeRenderer, Frame, Indexing};
use num::Complex;
use std::fs::File;
use std::path::Path;
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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
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
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const DEPTH: &str = "depth";
const LAYOUT: &str = "layout";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("mandelbrot contributors")
        .about("Parallel escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image, columns x rows"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .default_value("-2.0,-1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the rendered plane"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .default_value("1.0,1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the rendered plane"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads"),
        )
        .arg(
            Arg::with_name(DEPTH)
                .required(false)
                .long(DEPTH)
                .short("d")
                .takes_value(true)
                .default_value("1000")
                .validator(move |s| {
                    validate_range(
                        &s,
                        0,
                        200_000,
                        "Could not parse depth",
                        "Depth must be between 0 and 200000",
                    )
                })
                .help("Iteration cap per pixel"),
        )
        .arg(
            Arg::with_name(LAYOUT)
                .required(false)
                .long(LAYOUT)
                .takes_value(true)
                .possible_values(&["transposed", "row-major"])
                .default_value("transposed")
                .help("Buffer layout; transposed matches existing outputs but needs a square size"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let output = File::create(Path::new(outfile))?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::RGB(8))?;
    Ok(())
}

fn main() {
    let matches = args();
    let image_size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");
    let depth = i64::from_str(matches.value_of(DEPTH).unwrap()).expect("Could not parse depth");
    let indexing = match matches.value_of(LAYOUT).unwrap() {
        "row-major" => Indexing::RowMajor,
        _ => Indexing::Transposed,
    };

    let frame = match Frame::new(image_size.0, image_size.1, leftlower, rightupper, indexing) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("Bad frame configuration: {}", e);
            std::process::exit(1);
        }
    };
    let renderer = match EscapeRenderer::new(frame, depth) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Bad renderer configuration: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    match renderer.render(threads) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(pixels) => {
            let elapsed = start.elapsed();
            println!(
                "rendered {}x{} at depth {} with {} threads in {} us",
                image_size.0,
                image_size.1,
                depth,
                threads,
                elapsed.as_micros()
            );
            write_image(matches.value_of(OUTPUT).unwrap(), &pixels, image_size)
                .expect("Could not write image");
        }
    }
}
