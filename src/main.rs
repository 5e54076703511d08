use log::{info, warn};
use road_detector::batch;
use road_detector::config::road as cli;
use road_detector::disparity::io::{load_disparity, save_mask, write_json_file};
use road_detector::RoadDetector;
use std::env;
use std::fs;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = cli::parse_cli(env::args().skip(1))? else {
        return Ok(());
    };
    let start = Instant::now();
    let detector = RoadDetector::new(options.params.clone());
    info!("searching traversable regions...");

    if options.input.is_file() {
        // Single-file mode: raster failures are fatal.
        fs::create_dir_all(&options.out_dir)
            .map_err(|e| format!("failed to create {}: {e}", options.out_dir.display()))?;
        let disp = load_disparity(&options.input).map_err(|e| e.to_string())?;
        let report = detector.process(&disp);

        let name = options
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_path = options.out_dir.join(batch::output_name(&name));
        save_mask(&report.mask, &out_path).map_err(|e| e.to_string())?;
        if let Some(json_path) = &options.json_report {
            write_json_file(json_path, &report).map_err(|e| e.to_string())?;
        }

        println!("{} -> {}", options.input.display(), out_path.display());
        println!(
            "found={} traversable_px={} coverage={:.1}%",
            report.road.found,
            report.road.traversable_px,
            report.road.coverage * 100.0
        );
    } else {
        // Directory mode: per-file failures are recovered.
        let files = batch::collect_inputs(&options.input).map_err(|e| e.to_string())?;
        if options.json_report.is_some() {
            warn!("--json-report applies to single-file mode only, ignoring");
        }
        let report =
            batch::run_batch(&files, &options.out_dir, &detector).map_err(|e| e.to_string())?;
        println!(
            "{} processed, {} without ground plane, {} failed",
            report.processed, report.no_ground, report.failed
        );
    }

    println!("execution time: {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}
