use crate::{
    CleanArgs,
    build::{Builder, base_path_from_config},
    config::{DEFAULT_CONFIG_FILE, PoemConfig},
};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
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

    // Delete the generated page
    let output_path = Builder::new(config, base_path).output_path();
    if output_path.exists() {
        if args.dry_run {
            println!("Would delete {}", output_path.display());
        } else {
            tokio::fs::remove_file(&output_path).await?;
            println!("Deleted {}", output_path.display());
        }
    } else {
        println!("Nothing to clean at {}", output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "source: raven.txt\n").unwrap();
        std::fs::write(dir.path().join("raven.txt"), "Kra").unwrap();
        std::fs::write(dir.path().join("raven.html"), "<html>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_clean_removes_page_only() {
        let dir = project();
        let args = CleanArgs {
            config_file: Some(dir.path().join(DEFAULT_CONFIG_FILE)),
            dry_run: false,
        };

        run(&args).await.unwrap();

        assert!(!dir.path().join("raven.html").exists());
        assert!(dir.path().join("raven.txt").exists());
    }

    #[tokio::test]
    async fn test_clean_dry_run_keeps_page() {
        let dir = project();
        let args = CleanArgs {
            config_file: Some(dir.path().join(DEFAULT_CONFIG_FILE)),
            dry_run: true,
        };

        run(&args).await.unwrap();

        assert!(dir.path().join("raven.html").exists());
    }
}
