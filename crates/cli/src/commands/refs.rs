use crate::cli::OutputFormat;
use diffref_core::{DiffInfo, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Render resolved refs in the requested format.
///
/// The `github` format is also appended to the file named by `GITHUB_OUTPUT`
/// so later workflow steps can read `base` and `head`.
pub fn render(info: &DiffInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
        OutputFormat::Github => {
            let lines = github_output_lines(info);
            if let Some(path) = std::env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) {
                append_output(Path::new(&path), &lines)?;
            }
            Ok(lines)
        }
    }
}

fn github_output_lines(info: &DiffInfo) -> String {
    format!("base={}\nhead={}", info.base, info.head)
}

fn append_output(path: &Path, lines: &str) -> Result<()> {
    debug!(path = %path.display(), "Writing step outputs");
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{lines}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> DiffInfo {
        DiffInfo::new("refs/heads/main", "refs/pull/9/merge")
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&info(), OutputFormat::Text).unwrap(),
            "refs/heads/main...refs/pull/9/merge"
        );
    }

    #[test]
    fn test_render_json() {
        let output = render(&info(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["base"], "refs/heads/main");
        assert_eq!(value["head"], "refs/pull/9/merge");
    }

    #[test]
    fn test_render_github_appends_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_file = dir.path().join("output");
        std::fs::write(&output_file, "previous=1\n").unwrap();

        temp_env::with_var("GITHUB_OUTPUT", Some(&output_file), || {
            let rendered = render(&info(), OutputFormat::Github).unwrap();
            assert_eq!(rendered, "base=refs/heads/main\nhead=refs/pull/9/merge");
        });

        let written = std::fs::read_to_string(&output_file).unwrap();
        assert_eq!(
            written,
            "previous=1\nbase=refs/heads/main\nhead=refs/pull/9/merge\n"
        );
    }

    #[test]
    fn test_render_github_without_output_file() {
        temp_env::with_var_unset("GITHUB_OUTPUT", || {
            let rendered = render(&info(), OutputFormat::Github).unwrap();
            assert!(rendered.starts_with("base="));
        });
    }
}
