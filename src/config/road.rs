//! CLI options and JSON parameter config for the road-detector tool.
use crate::detector::RoadParams;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "\
Traversable region detection from stereo disparity maps.

Usage: road-detector [OPTIONS] DISP ODIR

Arguments:
  DISP  path to an input disparity map, or a directory of *.png maps
  ODIR  path to the output directory (created if missing)

Options:
      --config FILE       JSON file overriding detector parameters
      --json-report FILE  write the detection report as JSON (single-file mode)
  -v, --version           print version information
  -h, --help              print this help
";

/// Resolved options for one tool invocation.
#[derive(Clone, Debug)]
pub struct ToolOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub params: RoadParams,
    pub json_report: Option<PathBuf>,
}

/// Load detector parameters from a JSON config file.
pub fn load_params(path: &Path) -> Result<RoadParams, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Parse command-line arguments (without the program name).
///
/// `Ok(None)` means help or version information was printed and the
/// process should exit successfully.
pub fn parse_cli<I>(args: I) -> Result<Option<ToolOptions>, String>
where
    I: Iterator<Item = String>,
{
    let mut args = args;
    let mut input: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut json_report: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(None);
            }
            "-v" | "--version" => {
                println!("road-detector {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--config" => {
                let value = args.next().ok_or("missing value for --config")?;
                config_path = Some(PathBuf::from(value));
            }
            "--json-report" => {
                let value = args.next().ok_or("missing value for --json-report")?;
                json_report = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unknown option: {other}"));
            }
            other => {
                if input.is_none() {
                    input = Some(PathBuf::from(other));
                } else if out_dir.is_none() {
                    out_dir = Some(PathBuf::from(other));
                } else {
                    return Err(format!("unexpected argument: {other}"));
                }
            }
        }
    }

    let input = input.ok_or("missing DISP argument (see --help)")?;
    let out_dir = out_dir.ok_or("missing ODIR argument (see --help)")?;
    let params = match config_path {
        Some(path) => load_params(&path)?,
        None => RoadParams::default(),
    };

    Ok(Some(ToolOptions {
        input,
        out_dir,
        params,
        json_report,
    }))
}
