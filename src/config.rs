use directories::BaseDirs;
use std::fs;
use std::path::PathBuf;

/// Placeholder backend address, replaced in deployments via the conf file.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

pub fn config_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    let mut path = PathBuf::from(base_dirs.config_dir());
    path.push("recipe-explorer");
    path.push("recipe-explorer.conf");
    Some(path)
}

/// Effective API base URL: the first non-empty line of the conf file if one
/// exists, the compiled-in default otherwise.
pub fn api_base_url() -> String {
    if let Some(path) = config_path() {
        if let Ok(content) = fs::read_to_string(&path) {
            if let Some(url) = parse_base_url(&content) {
                return url;
            }
        }
    }
    DEFAULT_API_BASE_URL.to_string()
}

fn parse_base_url(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_line_wins() {
        let content = "\n  \nhttp://recipes.example/api\nhttp://other.example\n";
        assert_eq!(
            parse_base_url(content).as_deref(),
            Some("http://recipes.example/api")
        );
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let content = "# backend address\n  http://recipes.example/api  \n";
        assert_eq!(
            parse_base_url(content).as_deref(),
            Some("http://recipes.example/api")
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(
            parse_base_url("http://recipes.example/api/").as_deref(),
            Some("http://recipes.example/api")
        );
    }

    #[test]
    fn empty_content_means_no_override() {
        assert_eq!(parse_base_url(""), None);
        assert_eq!(parse_base_url("   \n# only a comment\n"), None);
    }
}
