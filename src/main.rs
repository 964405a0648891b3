use clap::Parser;
use facecount::utils::error::ErrorSeverity;
use facecount::utils::{logger, validation::Validate};
use facecount::{
    BatchEngine, BatchPipeline, CliConfig, DetectorSettings, FaceCounter, LocalStorage,
    RustfaceDetector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting facecount CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let detector =
        match RustfaceDetector::from_file(&config.model_path, DetectorSettings::default()) {
            Ok(detector) => detector,
            Err(e) => {
                tracing::error!("❌ Failed to load detection model: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }
        };

    let storage = LocalStorage::new(config.output_path.clone());
    let counter = FaceCounter::new(Box::new(detector));
    let pipeline = BatchPipeline::new(storage, config, counter);
    let engine = BatchEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Face counting completed successfully!");
            println!("✅ Face counting completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
