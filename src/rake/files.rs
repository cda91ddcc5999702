//! Rakefile file-name matching

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static RAKEFILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rakefile(\.rb)?$").expect("valid Rakefile name pattern"));
static RAKE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.rake$").expect("valid .rake pattern"));

/// Whether `path` names a Rakefile: a name ending in `Rakefile` or `Rakefile.rb` in any
/// case, or any `*.rake` file
pub fn is_rakefile(path: impl AsRef<Path>) -> bool {
    let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    RAKEFILE_NAME.is_match(name) || RAKE_EXTENSION.is_match(name)
}
