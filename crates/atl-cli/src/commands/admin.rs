use std::path::Path;

use anyhow::{Context, bail};
use atl_api::views::AdminView;
use atl_core::ExportModel;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atl admin`.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let admin = AdminView::new(&ctx.client);
    match action {
        AdminCommands::Export {
            model,
            output: target,
        } => {
            let data = admin.export(*model).await?;
            match target {
                Some(path) => {
                    write_export(path, &data)?;
                    output(
                        &json!({ "model": model, "path": path.display().to_string() }),
                        flags.format,
                    )
                }
                None => output(&data, flags.format),
            }
        }
        AdminCommands::Import { model, file } => {
            let body = read_import(file, *model)?;
            let submission = admin.import(*model, body).await?;
            if !submission.ok {
                bail!("{}", submission.message);
            }
            output(&submission, flags.format)
        }
    }
}

fn write_export(path: &Path, data: &serde_json::Value) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(data)?;
    text.push('\n');
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

fn read_import(path: &Path, model: ExportModel) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {model} import file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use atl_core::ExportModel;
    use serde_json::json;

    use super::{read_import, write_export};

    #[test]
    fn export_file_is_pretty_json() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("vendors.json");
        let data = json!([{"id": 1, "name": "Acme"}]);

        write_export(&path, &data).expect("export writes");

        let text = read_import(&path, ExportModel::Vendors).expect("file reads back");
        assert!(text.contains("\n  {"));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed, data);
    }

    #[test]
    fn missing_import_file_names_model_and_path() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("absent.json");
        let err = read_import(&path, ExportModel::LeadStages).expect_err("should fail");
        let text = err.to_string();
        assert!(text.contains("leadstages import file"));
        assert!(text.contains("absent.json"));
    }
}
