use diffref_core::{DiffInfo, shell};

/// Build a `git diff` invocation comparing the resolved refs.
///
/// Every word is escaped, so the result can be pasted into a shell even when
/// paths contain spaces or quotes.
pub fn command_line(info: &DiffInfo, two_dot: bool, name_only: bool, paths: &[String]) -> String {
    let dots = if two_dot { ".." } else { "..." };
    let mut words = vec![
        "git".to_string(),
        "diff".to_string(),
        format!("{}{dots}{}", info.base, info.head),
    ];
    if name_only {
        words.push("--name-only".to_string());
    }
    if !paths.is_empty() {
        words.push("--".to_string());
        words.extend(paths.iter().cloned());
    }
    shell::join(&words)
}
