use clap::{clap_app, value_t};
use log::*;
use rand::{thread_rng, Rng};
use std::time::Instant;

use skein::crypto::threefish::encrypt_block;
use skein::crypto::{digest, Skein512};
use skein::defs::{BLOCK_LEN, STATE_WORDS};

pub fn main() {
    skein::log_cfg::init(false);
    let args = clap_app!(benchmark =>
        (version: skein::defs::skein_version())
        (about: "Skein benchmark tool")
        (@arg tf: --tf +takes_value default_value("0") "Number of repetitions for Threefish-512 block encryption")
        (@arg digest: --digest +takes_value default_value("0") "Number of repetitions for Skein-512-512")
        (@arg size: --size +takes_value default_value("1024") "Message size in bytes for the digest benchmarks")
    )
    .get_matches();

    let tf_n = value_t!(args, "tf", u32).unwrap_or_else(|e| e.exit());
    let digest_n = value_t!(args, "digest", u32).unwrap_or_else(|e| e.exit());
    let size = value_t!(args, "size", usize).unwrap_or_else(|e| e.exit());

    if tf_n > 0 {
        threefish(tf_n);
    }
    if digest_n > 0 {
        one_shot(digest_n, size);
        streaming(digest_n, size);
    }
}

fn threefish(n: u32) {
    info!("Starting Threefish-512 benchmark");
    let mut rng = thread_rng();
    let key: [u64; STATE_WORDS] = rng.gen();
    let mut block = [0u8; BLOCK_LEN];
    rng.fill(&mut block[..]);
    let start = Instant::now();
    for i in 0..n {
        block = encrypt_block(&key, i as u64, 0, &block);
    }
    info!("Anti-optimization output: {}", block[0]);
    info!("Threefish-512 benchmark: {:.2} bps", per_sec(n, &start));
}

fn one_shot(n: u32, size: usize) {
    info!("Preparing Skein-512 benchmark ({} bytes)", size);
    let mut msg = vec![0u8; size];
    thread_rng().fill(&mut msg[..]);
    let start = Instant::now();
    let mut acc = 0u8;
    for _ in 0..n {
        acc ^= digest(&msg)[0];
    }
    let rate = per_sec(n, &start);
    info!("Anti-optimization output: {}", acc);
    info!(
        "Skein-512 one-shot benchmark: {:.2} hps ({:.2} MB/s)",
        rate,
        rate * size as f64 / 1e6
    );
}

fn streaming(n: u32, size: usize) {
    let mut msg = vec![0u8; size];
    thread_rng().fill(&mut msg[..]);
    let start = Instant::now();
    let mut acc = 0u8;
    for _ in 0..n {
        let mut h = Skein512::new();
        for chunk in msg.chunks(100) {
            h.update(chunk);
        }
        acc ^= h.finalize()[0];
    }
    info!("Anti-optimization output: {}", acc);
    info!("Skein-512 streaming benchmark: {:.2} hps", per_sec(n, &start));
}

fn per_sec(n: u32, start: &Instant) -> f64 {
    n as f64 / start.elapsed().as_secs_f64()
}
