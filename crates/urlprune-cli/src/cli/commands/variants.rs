//! `urlprune variants <url>` – show the URLs a probe would fetch.

use urlprune_core::variants::generate;

pub fn run_variants(url: &str) {
    for v in generate(url) {
        match v.param {
            Some(p) => println!("{}\t{}", p, v.url),
            None => println!("(aa test)\t{}", v.url),
        }
    }
}
