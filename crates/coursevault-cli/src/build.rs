//! The `build` command.

use std::io::Write;

use coursevault::{Config, ProcessResult, process_content};
use coursevault_core::Error as CoreError;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::vault::read_vault;

/// Exit status of a build whose artifact was written.
pub const SUCCESS: u8 = 0;

/// Exit status when `--strict` is set and the artifact has errors.
pub const STRICT_FAILURE: u8 = 2;

/// Reads the vault, compiles it and writes the JSON artifact.
///
/// Returns the process exit status.
pub async fn run_build(args: &BuildArgs, config: &Config) -> Result<u8> {
    let files = read_vault(&args.vault).await?;
    let result = process_content(&files, config);
    let json = render(&result, args.pretty)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .map_err(|e| CoreError::io_with_path(e, path))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    eprintln!("{}", summary(&result));

    if args.strict && result.has_blocking_errors() {
        return Ok(STRICT_FAILURE);
    }
    Ok(SUCCESS)
}

/// Serializes the artifact.
pub fn render(result: &ProcessResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// One-line run summary.
pub fn summary(result: &ProcessResult) -> String {
    format!(
        "{} module(s), {} course(s): {} error(s), {} warning(s)",
        result.modules.len(),
        result.courses.len(),
        result.error_count(),
        result.warning_count()
    )
}
