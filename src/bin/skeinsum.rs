use clap::{clap_app, value_t};
use log::*;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use skein::cfg::Config;
use skein::checksum::{self, Style};
use skein::defs::Digest;
use skein::error::Error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = clap_app!(skeinsum =>
        (version: skein::defs::skein_version())
        (about: "Print or check Skein-512-512 checksums")
        (@arg files: ... "Files to hash, or checksum lists with --check (stdin if none or '-')")
        (@arg check: -c --check "Read checksums from the files and verify them")
        (@arg tag: --tag "Create BSD-style checksum lines")
        (@arg jobs: -j --jobs +takes_value "Number of files hashed in parallel")
        (@arg config: --config +takes_value "Path to a TOML configuration file")
        (@arg verbose: -v --verbose ... "Also show trace output")
    )
    .get_matches();

    skein::log_cfg::init(args.occurrences_of("verbose") > 0);

    let mut cfg = Config::new(args.value_of("config"))?;
    if args.is_present("tag") {
        cfg.output.tag = true;
    }
    if args.is_present("jobs") {
        cfg.jobs = value_t!(args, "jobs", usize)?;
    }
    if cfg.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.jobs)
            .build_global()?;
    }
    debug!("Using {:?}", cfg);

    let files: Vec<String> = match args.values_of("files") {
        Some(values) => values.map(String::from).collect(),
        None => vec!["-".to_string()],
    };

    let all_ok = if args.is_present("check") {
        check_all(&files, &cfg)
    } else {
        hash_all(&files, &cfg)
    };
    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}

fn digest_path(name: &str, buf_size: usize) -> Result<Digest, Error> {
    if name == "-" {
        checksum::hash_reader(io::stdin(), buf_size)
    } else {
        checksum::hash_file(Path::new(name), buf_size)
    }
}

fn hash_all(files: &[String], cfg: &Config) -> bool {
    let style = if cfg.output.tag { Style::Bsd } else { Style::Gnu };
    let results: Vec<Result<Digest, Error>> = files
        .par_iter()
        .map(|f| digest_path(f, cfg.read_buffer_size))
        .collect();

    let mut all_ok = true;
    for (name, res) in files.iter().zip(results) {
        match res {
            Ok(d) => println!("{}", checksum::format_line(&d, name, style, cfg.output.uppercase)),
            Err(e) => {
                error!("{}", e);
                all_ok = false;
            }
        }
    }
    all_ok
}

fn read_list(name: &str) -> Result<Vec<String>, Error> {
    let lines = if name == "-" {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        let file = File::open(name).map_err(|e| Error::IoError(format!("{}: {}", name, e)))?;
        BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?
    };
    Ok(lines)
}

fn check_all(lists: &[String], cfg: &Config) -> bool {
    let mut entries = Vec::new();
    let mut all_ok = true;
    for list in lists {
        match read_list(list) {
            Ok(lines) => {
                for (no, line) in lines.iter().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match checksum::parse_line(line) {
                        Ok(entry) => entries.push(entry),
                        Err(e) => {
                            warn!("{}:{}: {}", list, no + 1, e);
                            all_ok = false;
                        }
                    }
                }
            }
            Err(e) => {
                error!("{}", e);
                all_ok = false;
            }
        }
    }

    let verdicts: Vec<Result<bool, Error>> = entries
        .par_iter()
        .map(|(expected, name)| {
            digest_path(name, cfg.read_buffer_size).map(|d| d[..] == expected[..])
        })
        .collect();

    let mut failed = 0;
    for ((_, name), verdict) in entries.iter().zip(verdicts) {
        match verdict {
            Ok(true) => println!("{}: OK", name),
            Ok(false) => {
                println!("{}: FAILED", name);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED open or read", name);
                debug!("{}", e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        warn!("{} of {} computed checksums did NOT match", failed, entries.len());
    }
    all_ok && failed == 0
}
