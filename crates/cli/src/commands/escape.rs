use diffref_core::shell;

/// Escape each argument and join them with spaces.
pub fn execute(args: &[String]) -> String {
    shell::join(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute() {
        let args = vec!["main".to_string(), "it's here".to_string()];
        assert_eq!(execute(&args), r"main 'it'\''s here'");
    }

    #[test]
    fn test_execute_no_args() {
        assert_eq!(execute(&[]), "");
    }
}
