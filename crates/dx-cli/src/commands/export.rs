//! `dxw export`: download the backend's report of all stored results.

use std::path::{Path, PathBuf};

use anyhow::Context;
use dx_core::enums::ExportFormat;
use dx_core::responses::ExportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

/// Handle `dxw export`.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = if args.url_only {
        ExportResponse {
            format: args.report,
            url: ctx.api.export_url(args.report),
            path: None,
            bytes: None,
        }
    } else {
        let target = target_path(args.output.as_deref(), &ctx.config.general.export_dir, args.report);
        download(ctx, args.report, &target).await?
    };

    output(&response, flags.format)?;
    if let Some(path) = &response.path {
        ui::hint(flags, &format!("Saved {path}"));
    }
    Ok(())
}

/// Download a report to `target`, creating parent directories.
pub async fn download(
    ctx: &AppContext,
    format: ExportFormat,
    target: &Path,
) -> anyhow::Result<ExportResponse> {
    let spinner = Progress::spinner(&format!("Downloading {format} report..."));
    let bytes = match ctx.api.download_export(format).await {
        Ok(bytes) => bytes,
        Err(error) => {
            spinner.finish_err("Download failed");
            return Err(error).with_context(|| format!("failed to download the {format} report"));
        }
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(target, &bytes)
        .with_context(|| format!("failed to write {}", target.display()))?;
    spinner.finish_ok(&format!("Saved {}", target.display()));

    Ok(ExportResponse {
        format,
        url: ctx.api.export_url(format),
        path: Some(target.display().to_string()),
        bytes: u64::try_from(bytes.len()).ok(),
    })
}

/// `--output` when given (a directory gets the default file name), else the
/// default file name inside `export_dir`.
pub fn target_path(output: Option<&Path>, export_dir: &str, format: ExportFormat) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(format.default_file_name()),
        Some(path) => path.to_path_buf(),
        None => Path::new(export_dir).join(format.default_file_name()),
    }
}
