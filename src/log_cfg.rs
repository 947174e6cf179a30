use simplelog::{LevelFilter, TermLogger, TerminalMode};

/// Initialize terminal logging; `verbose` additionally enables trace output.
pub fn init(verbose: bool) {
    let filter;
    if verbose {
        filter = LevelFilter::Trace;
    } else if cfg!(debug_assertions) {
        filter = LevelFilter::Debug;
    } else {
        filter = LevelFilter::Info;
    }

    TermLogger::init(filter, simplelog::Config::default(), TerminalMode::Stderr)
        .expect("Initializing skein logging failed");
}
