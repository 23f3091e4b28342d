use crate::{
    RenderArgs,
    build::{Builder, base_path_from_config},
    config::{DEFAULT_CONFIG_FILE, PoemConfig},
};

pub async fn run(args: &RenderArgs) -> Result<(), anyhow::Error> {
    // Determine the config file path
    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    let config_path = if config_path.is_relative() {
        std::env::current_dir()?.join(&config_path)
    } else {
        config_path
    };

    let config = PoemConfig::load_from_arg(args.config_file.as_deref())?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    let builder = Builder::new(config, base_path).strict(args.strict);
    let result = builder.build()?;

    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }

    println!(
        "Wrote {} ({} stages applied to {})",
        result.output_path.display(),
        result.stages,
        result.source_path.display()
    );

    Ok(())
}
