use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use popcorn_config::{Config, PathManager};
use serde_json::json;

fn mask(secret: &str) -> String {
    if secret.len() <= 4 {
        "*".repeat(secret.len())
    } else {
        format!("{}{}", &secret[..4], "*".repeat(secret.len() - 4))
    }
}

pub fn run_show(output: &Output) -> Result<()> {
    let paths = PathManager::new().map_err(|e| eyre!("{}", e))?;
    let config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;

    if output.format() == OutputFormat::Human {
        output.info(format!("Config file: {}", paths.config_file().display()));
        output.info(format!("OMDb base URL: {}", config.omdb.base_url));
        output.info(format!("OMDb API key: {}", mask(&config.omdb.api_key)));
    } else {
        output.print_json(&json!({
            "type": "config",
            "config_file": paths.config_file().display().to_string(),
            "omdb": {
                "base_url": config.omdb.base_url,
                "api_key": mask(&config.omdb.api_key),
            },
        }));
    }

    Ok(())
}

pub fn run_set_key(api_key: &str, output: &Output) -> Result<()> {
    let paths = PathManager::new().map_err(|e| eyre!("{}", e))?;
    let mut config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;
    config.omdb.api_key = api_key.to_string();
    config
        .save(&paths.config_file())
        .map_err(|e| eyre!("{}", e))?;
    output.success("OMDb API key updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_prefix_only() {
        assert_eq!(mask("dabffc90"), "dabf****");
        assert_eq!(mask("ab"), "**");
    }
}
