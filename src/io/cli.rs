//! Command-line interface for rendering pattern previews from tile images

use crate::io::assets::{AssetLoader, AssetSource};
use crate::io::color::Color;
use crate::io::configuration::{
    BUNDLED_OUTPUT_NAME, DEFAULT_BACKGROUND, DEFAULT_ROTATION, DEFAULT_SPACING,
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::save_surface_png;
use crate::io::progress::ProgressManager;
use crate::io::session::PreviewSession;
use crate::math::sampling::Smoothing;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "patternize")]
#[command(
    author,
    version,
    about = "Render a staggered, rotated tile pattern preview"
)]
/// Command-line arguments for the preview renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile image or directory of images (the bundled motif when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    pub height: u32,

    /// Distance between tile anchors (10-200)
    #[arg(short, long, default_value_t = DEFAULT_SPACING)]
    pub spacing: f64,

    /// Drawn tile edge length (10-200)
    #[arg(short = 'z', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: f64,

    /// Per-tile rotation in degrees, clockwise (-180 to 180)
    #[arg(short, long, default_value_t = DEFAULT_ROTATION, allow_negative_numbers = true)]
    pub rotation: f64,

    /// Background color: name, #rrggbb, #rgb, rgb(r, g, b) or rgba(r, g, b, a)
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Output path (single target or bundled motif only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use nearest-neighbour sampling instead of bilinear smoothing
    #[arg(long)]
    pub nearest: bool,

    /// Render even if the preview file already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log render diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sampling filter selected by the flags
    pub const fn smoothing(&self) -> Smoothing {
        if self.nearest {
            Smoothing::Nearest
        } else {
            Smoothing::Bilinear
        }
    }

    /// Default log level when `RUST_LOG` is not set
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    /// Install the `env_logger` backend, honouring `RUST_LOG` when set
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level().as_str());
        // A logger may already be installed when embedded or under test
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }
}

/// One preview to render: a tile source and where its preview goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Tile image, or `None` for the bundled motif
    pub input: Option<PathBuf>,
    /// Destination PNG
    pub output: PathBuf,
}

/// Orchestrates preview rendering for the selected targets
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every selected preview
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, asset loading, parameter
    /// validation or preview export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let jobs = self.collect_jobs()?;
        let mut written = Vec::with_capacity(jobs.len());

        if jobs.is_empty() {
            return Ok(written);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for job in &jobs {
            self.process_job(job)?;
            written.push(job.output.clone());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Resolve the target argument into render jobs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a file nor a directory
    /// - The target file has an unsupported extension
    /// - `--output` is combined with a directory target
    /// - The directory cannot be read
    pub fn collect_jobs(&self) -> Result<Vec<RenderJob>> {
        let Some(target) = &self.cli.target else {
            let output = self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(BUNDLED_OUTPUT_NAME));
            return Ok(vec![RenderJob {
                input: None,
                output,
            }]);
        };

        if target.is_file() {
            if !is_supported(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"unsupported image extension",
                ));
            }
            if let Some(output) = &self.cli.output {
                return Ok(vec![RenderJob {
                    input: Some(target.clone()),
                    output: output.clone(),
                }]);
            }
            Ok(self
                .job_for(target)
                .map_or_else(Vec::new, |job| vec![job]))
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"--output cannot be used with a directory target",
                ));
            }
            let mut inputs = Vec::new();
            for entry in std::fs::read_dir(target).map_err(file_system(target, "read directory"))? {
                let path = entry.map_err(file_system(target, "read directory"))?.path();
                if path.is_file() && is_supported(&path) && !is_preview(&path) {
                    inputs.push(path);
                }
            }
            inputs.sort();
            Ok(inputs.iter().filter_map(|path| self.job_for(path)).collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn job_for(&self, input: &Path) -> Option<RenderJob> {
        let output = Self::get_output_path(input);
        if self.cli.skip_existing() && output.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (preview exists)", input.display());
            }
            return None;
        }
        Some(RenderJob {
            input: Some(input.to_path_buf()),
            output,
        })
    }

    fn process_job(&self, job: &RenderJob) -> Result<()> {
        let start_time = Instant::now();

        let loader = match &job.input {
            Some(path) => {
                if let Some(ref pm) = self.progress_manager {
                    pm.start_file(path);
                }
                AssetLoader::new([AssetSource::File(path.clone())])
            }
            None => AssetLoader::bundled(),
        };

        let mut session = PreviewSession::new().with_smoothing(self.cli.smoothing());
        session.resize(self.cli.width, self.cli.height)?;
        session.set_spacing(self.cli.spacing)?;
        session.set_tile_size(self.cli.size)?;
        session.set_rotation(self.cli.rotation)?;
        session.set_background(self.cli.background)?;
        session.attach_assets(loader.load_all()?)?;

        save_surface_png(session.surface(), &job.output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }

        Ok(())
    }

    /// Preview path for `input_path`: `<stem>_pattern.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

fn is_preview(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
