use crate::config::Config;
use crate::error::Result;

/// Print the full configuration as YAML.
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", serde_yaml_ng::to_string(&config)?);
    Ok(())
}

/// Print one configuration value.
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Update one configuration value and persist it.
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{key} = {value}");
    Ok(())
}
