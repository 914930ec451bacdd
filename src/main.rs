/*
 * File: /main.rs
 * Created Date: Tuesday November 21st 2023
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Command line entry point for the mining pipeline
 */

use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::process;

use fast_itemset::config::Config;
use fast_itemset::memory::TrackingAllocator;
use fast_itemset::pipeline::MiningPipeline;
use log::{error, info, LevelFilter};

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::new(std::env::args())?;
    let pipeline = MiningPipeline::builder()
        .with_config(config.get_mining().clone())
        .build()?;

    let report = pipeline
        .run_file(config.get_data_path())?
        .with_command(config.get_command());
    info!("{}", report.summary());

    match config.get_output() {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(path)?);
            report.write_to(&mut writer)?;
            writer.flush()?;
            info!("Results written to: {}", path.display());
        }
        None => report.write_to(io::stdout().lock())?,
    }
    Ok(())
}

fn main() {
    fast_itemset::init_logger(LevelFilter::Info).expect("Failed to initialize logger");

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
