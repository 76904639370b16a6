/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fs;
use std::io::Write;

use anyhow::Context;

use crate::input::SourceUnit;

/// Deliver formatted units. File-backed units overwrite their own file,
/// the stdin unit goes to the given writer verbatim.
pub fn route<W: Write>(results: &[SourceUnit], stdout: &mut W) -> anyhow::Result<()> {
    for unit in results {
        match &unit.path {
            Some(path) => fs::write(path, &unit.content)
                .with_context(|| format!("Could not write {}", path.display()))?,
            None => stdout
                .write_all(unit.content.as_bytes())
                .context("Could not write to stdout")?,
        }
    }
    stdout.flush().context("Could not write to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "html-beautifier-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn stdin_results_go_to_stdout_verbatim() {
        let mut stdout = Vec::new();
        route(
            &[SourceUnit {
                path: None,
                content: "<span>\n    html\n</span>".to_string(),
            }],
            &mut stdout,
        )
        .unwrap();
        assert_eq!(stdout, b"<span>\n    html\n</span>");
    }

    #[test]
    fn file_results_overwrite_their_source() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("page.html");
        fs::write(&path, "<p>old</p>").unwrap();

        let mut stdout = Vec::new();
        route(
            &[SourceUnit {
                path: Some(path.clone()),
                content: "<p>\n    new\n</p>".to_string(),
            }],
            &mut stdout,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>\n    new\n</p>");
        assert!(stdout.is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directories_are_reported_with_the_path() {
        let dir = scratch_dir("missing");
        let path = dir.join("gone").join("page.html");
        let error = route(
            &[SourceUnit {
                path: Some(path.clone()),
                content: String::new(),
            }],
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(error.to_string().contains("Could not write"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
