use super::error;
use super::output;
use super::{Commands, ConfigAction};
use crate::app::config::Config;
use crate::file::{self, Shredder};
use crate::path::PathResolver;
use anyhow::Result;
use std::time::Duration;

/// Handle a CLI command and return exit code
pub async fn handle_command(command: Commands, mut config: Config) -> i32 {
    let resolver = PathResolver::with_home_env_var(config.paths.home_env_var.clone());

    let result = match command {
        Commands::Resolve { path, json } => handle_resolve(&resolver, &path, json),
        Commands::Shred { path, passes, timeout } => {
            handle_shred(&resolver, &config, &path, passes, timeout).await
        }
        Commands::IsDir { path } => Ok(print_predicate(file::is_dir(resolver.resolve(&path)))),
        Commands::IsFile { path } => Ok(print_predicate(file::is_file(resolver.resolve(&path)))),
        Commands::IsEmptyDir { path, json } => handle_is_empty_dir(&resolver, &path, json),
        Commands::CleanFilename { name } => {
            println!("{}", file::clean_filename(&name));
            Ok(error::SUCCESS)
        }
        Commands::Copy { from, to, force } => handle_copy(&resolver, &from, &to, force),
        Commands::Contains { path, needle } => {
            match file::file_contains(resolver.resolve(&path), &needle) {
                Ok(found) => Ok(print_predicate(found)),
                Err(e) => Ok(report_fs_error(&e)),
            }
        }
        Commands::Config { action } => handle_config(action, &mut config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            error::ERROR
        }
    }
}

fn print_predicate(answer: bool) -> i32 {
    println!("{}", answer);
    if answer { error::SUCCESS } else { error::NOT_FOUND }
}

fn report_fs_error(err: &crate::error::FsError) -> i32 {
    eprintln!("Error: {}", err);
    error::exit_code_for(err)
}

fn handle_resolve(resolver: &PathResolver, path: &str, json: bool) -> Result<i32> {
    let resolved = resolver.resolve(path);
    println!("{}", output::format_resolved(path, &resolved, json));
    Ok(error::SUCCESS)
}

/// Shred a file, optionally bounded by a timeout
async fn handle_shred(
    resolver: &PathResolver,
    config: &Config,
    path: &str,
    passes: Option<u32>,
    timeout: Option<u64>,
) -> Result<i32> {
    let target = resolver.resolve(path);
    let mut shred_config = config.shred.clone();
    if let Some(passes) = passes {
        shred_config.passes = passes;
    }
    let passes = shred_config.passes;
    let shredder = Shredder::from_config(&shred_config);

    let size = std::fs::metadata(&target).map(|m| m.len()).unwrap_or(0);

    let result = match timeout.or(config.shred.timeout_secs) {
        Some(secs) => {
            shredder
                .shred_with_timeout(target.clone(), Duration::from_secs(secs))
                .await
        }
        None => shredder.shred(&target),
    };

    match result {
        Ok(()) => {
            println!("{}", output::format_shredded(&target, size, passes));
            Ok(error::SUCCESS)
        }
        Err(e) => {
            if e.is_cleanup_only() {
                eprintln!("Content of {} was destroyed but the file could not be removed", target.display());
            } else if e.file_intact() {
                eprintln!("{} was not removed", target.display());
            }
            Ok(report_fs_error(&e))
        }
    }
}

fn handle_is_empty_dir(resolver: &PathResolver, path: &str, json: bool) -> Result<i32> {
    match file::is_empty_dir(resolver.resolve(path)) {
        Ok(empty) => {
            println!("{}", output::format_empty_dir(path, empty, json));
            Ok(if empty { error::SUCCESS } else { error::NOT_FOUND })
        }
        Err(e) => Ok(report_fs_error(&e)),
    }
}

fn handle_copy(resolver: &PathResolver, from: &str, to: &str, force: bool) -> Result<i32> {
    let from = resolver.resolve(from);
    let to = resolver.resolve(to);

    let result = if force {
        file::copy_file_force(&from, &to)
    } else {
        file::copy_file(&from, &to)
    };

    match result {
        Ok(()) => {
            println!("Copied {} to {}", from.display(), to.display());
            Ok(error::SUCCESS)
        }
        Err(e) => Ok(report_fs_error(&e)),
    }
}

/// Handle configuration commands
fn handle_config(action: ConfigAction, config: &mut Config) -> Result<i32> {
    match action {
        ConfigAction::Get { key } => {
            let value = get_config_value(config, &key)?;
            println!("{}", value);
            Ok(error::SUCCESS)
        }
        ConfigAction::Set { key, value } => {
            if let Err(e) = set_config_value(config, &key, &value) {
                eprintln!("Error: {}", e);
                return Ok(error::INVALID_INPUT);
            }
            config.save()?;
            println!("Configuration updated: {} = {}", key, value);
            Ok(error::SUCCESS)
        }
        ConfigAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&*config)?);
            } else {
                println!("{}", toml::to_string_pretty(&*config)?);
            }
            Ok(error::SUCCESS)
        }
        ConfigAction::Path => {
            println!("{}", crate::util::paths::get_app_config_path()?.display());
            Ok(error::SUCCESS)
        }
        ConfigAction::Init => {
            let path = crate::util::paths::get_app_config_path()?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Wrote default config to {}", path.display());
            }
            Ok(error::SUCCESS)
        }
    }
}

/// Get configuration value by dot notation key
fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["shred", "passes"] => Ok(config.shred.passes.to_string()),
        ["shred", "chunk_size"] => Ok(config.shred.chunk_size.to_string()),
        ["shred", "sync_each_pass"] => Ok(config.shred.sync_each_pass.to_string()),
        ["shred", "timeout_secs"] => Ok(config
            .shred
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_default()),
        ["paths", "home_env_var"] => Ok(config.paths.home_env_var.clone()),
        ["logging", "level"] => Ok(config.logging.level.clone()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set configuration value by dot notation key, rejecting invalid results
fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut updated = config.clone();

    match parts.as_slice() {
        ["shred", "passes"] => updated.shred.passes = value.parse()?,
        ["shred", "chunk_size"] => updated.shred.chunk_size = value.parse()?,
        ["shred", "sync_each_pass"] => updated.shred.sync_each_pass = value.parse()?,
        ["shred", "timeout_secs"] => {
            updated.shred.timeout_secs = if value.is_empty() { None } else { Some(value.parse()?) }
        }
        ["paths", "home_env_var"] => updated.paths.home_env_var = value.to_string(),
        ["logging", "level"] => updated.logging.level = value.to_string(),
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    updated.validate()?;
    *config = updated;
    Ok(())
}
