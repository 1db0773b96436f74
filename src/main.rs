use std::env;

use tealstrip::{config::RunConfig, run};

fn main() {
    let args: Vec<String> = env::args().collect();

    let config_path = &args[1];
    let mut config = RunConfig::read_config(config_path).unwrap();
    if let Some(dir) = args.get(2) {
        config.image_dir = dir.into();
    }

    println!("Removing teal shadows from product images...\n");

    let total = run(&config).unwrap();

    println!("\nDone! Removed {} teal pixels total", total);
}
