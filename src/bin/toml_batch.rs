use anyhow::Context;
use clap::Parser;
use facecount::config::toml_config::TomlConfig;
use facecount::domain::ports::ConfigProvider;
use facecount::utils::{logger, validation::Validate};
use facecount::{BatchEngine, BatchPipeline, FaceCounter, LocalStorage, RustfaceDetector};

#[derive(Parser)]
#[command(name = "toml-batch")]
#[command(about = "Face counting batch driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "facecount.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the skip-unreadable policy from the config file
    #[arg(long)]
    skip_unreadable: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based face counting");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(skip) = args.skip_unreadable {
        config
            .error_handling
            .get_or_insert_with(Default::default)
            .skip_unreadable = Some(skip);
        tracing::info!("🔧 skip_unreadable overridden to: {}", skip);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        println!("Dry run - pipeline '{}'", config.pipeline.name);
        println!("  images dir: {}", config.images_dir());
        println!("  model:      {}", config.model_path());
        println!(
            "  output:     {}/{}",
            config.output_path(),
            config.output_filename()
        );
        return Ok(());
    }

    let detector = RustfaceDetector::from_file(config.model_path(), config.detector_settings())
        .context("failed to load the detection model")?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let counter = FaceCounter::new(Box::new(detector));
    let pipeline = BatchPipeline::new(storage, config, counter);
    let engine = BatchEngine::new(pipeline);

    let output_path = engine.run().context("face counting batch failed")?;

    println!("✅ Face counting completed successfully!");
    println!("📁 Output saved to: {}", output_path);

    Ok(())
}
