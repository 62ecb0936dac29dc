use crate::core::{page_or_write, should_page};
use crate::domain::areas::repository::Repository;
use colored::Colorize;

impl Repository {
    /// Unified diff text for the given paths, or for the whole working tree
    /// when no path is given. Raw git output, unrendered.
    pub async fn file_diff(&self, paths: &[String]) -> anyhow::Result<String> {
        let mut args = vec!["diff"];
        if !paths.is_empty() {
            args.push("--");
            args.extend(paths.iter().map(String::as_str));
        }

        self.git().run(&args).await?.require("diff")
    }

    /// Show the diff, colorized, through the pager when stdout is an
    /// interactive terminal.
    pub async fn diff(&mut self, paths: &[String], no_pager: bool) -> anyhow::Result<()> {
        let raw = self.file_diff(paths).await?;
        if raw.is_empty() {
            return Ok(());
        }

        let rendered = colorize_diff(&raw);
        let paged = should_page(no_pager);
        page_or_write(self.writer().as_mut(), &rendered, paged)
    }
}

/// Markup for unified diff text: file headers bold, hunk headers cyan,
/// additions green, removals red. Context lines pass through untouched.
fn colorize_diff(raw: &str) -> String {
    let mut rendered = String::with_capacity(raw.len());

    for line in raw.lines() {
        let line = if is_file_header(line) {
            line.bold().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };

        rendered.push_str(&line);
        rendered.push('\n');
    }

    rendered
}

fn is_file_header(line: &str) -> bool {
    // `---`/`+++` must be matched before the plain removal/addition
    // markers, so they count as headers here.
    line.starts_with("diff --git")
        || line.starts_with("index ")
        || line.starts_with("--- ")
        || line.starts_with("+++ ")
        || line.starts_with("new file mode")
        || line.starts_with("deleted file mode")
        || line.starts_with("old mode")
        || line.starts_with("new mode")
}
