use crate::error::Result;
use catalog_common::export::{csv_core, excel_core};
use catalog_common::{ExportArtifact, Record};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use csv or excel", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
        }
    }
}

/// 検索後の集合から成果物を作る（空なら EmptyExport）
pub fn build_artifact(records: &[Record], format: ExportFormat) -> Result<ExportArtifact> {
    let artifact = match format {
        ExportFormat::Csv => csv_core::csv_artifact(records)?,
        ExportFormat::Excel => excel_core::excel_artifact(records)?,
    };
    Ok(artifact)
}

/// 保存先を決める
///
/// ディレクトリなら既定のファイル名を付ける。ファイル名の拡張子が
/// 形式と合わなければ形式側の拡張子に置き換える。
fn output_path_for(output: &Path, artifact: &ExportArtifact) -> PathBuf {
    let expected = Path::new(artifact.file_name).extension();
    match output.extension() {
        _ if output.is_dir() => output.join(artifact.file_name),
        None => output.join(artifact.file_name),
        Some(ext) if Some(ext) == expected => output.to_path_buf(),
        Some(ext) => {
            let fixed = match expected {
                Some(expected) => output.with_extension(expected),
                None => output.to_path_buf(),
            };
            tracing::warn!(
                requested = %ext.to_string_lossy(),
                path = %fixed.display(),
                "extension does not match export format; replaced"
            );
            fixed
        }
    }
}

/// 成果物をディレクトリ（またはファイルパス）に保存
pub fn write_artifact(artifact: &ExportArtifact, output: &Path) -> Result<PathBuf> {
    let path = output_path_for(output, artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), content_type = artifact.content_type, "export written");
    Ok(path)
}

pub fn export_records(records: &[Record], format: ExportFormat, output: &Path) -> Result<PathBuf> {
    let artifact = build_artifact(records, format)?;
    write_artifact(&artifact, output)
}
