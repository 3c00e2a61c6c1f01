use serde::Serialize;
use std::fmt;

use crate::config::AppConfig;

/// Shown in place of a config value that was not provided.
pub const NOT_SET: &str = "Not set";

pub const BUCKET_LABEL: &str = "Bucket Name";
pub const QUEUE_LABEL: &str = "Queue Name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub label: &'static str,
    pub value: String,
}

impl DisplayLine {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: value.unwrap_or(NOT_SET).to_string(),
        }
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// The bucket line followed by the queue line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigView {
    pub bucket: DisplayLine,
    pub queue: DisplayLine,
}

pub fn render(config: &AppConfig) -> ConfigView {
    ConfigView {
        bucket: DisplayLine::new(BUCKET_LABEL, config.bucket_name.as_deref()),
        queue: DisplayLine::new(QUEUE_LABEL, config.queue_name.as_deref()),
    }
}

impl ConfigView {
    pub fn lines(&self) -> Vec<String> {
        vec![self.bucket.to_string(), self.queue.to_string()]
    }

    /// Full HTML document with one `<p>` per line inside the page header.
    pub fn to_html(&self) -> String {
        let paragraphs: String = self
            .lines()
            .iter()
            .map(|line| format!("        <p>{}</p>\n", escape_html(line)))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Configuration</title>
    <style>
      .App {{ text-align: center; }}
      .App-header {{
        background-color: #282c34;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        font-size: calc(10px + 2vmin);
        color: white;
      }}
    </style>
  </head>
  <body>
    <div class="App">
      <header class="App-header">
{paragraphs}      </header>
    </div>
  </body>
</html>
"#
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
