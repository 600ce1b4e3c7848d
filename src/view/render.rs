use colored::Colorize;

/// One piece of rendered content inside a [`Container`](super::Container).
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Error(String),
    /// `status-message info` box.
    Status(String),
    Job { title: String, url: String },
}

const LINK_LABEL: &str = "link";

pub fn html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading(text) => out.push_str(&format!("<h3>{}</h3>\n", escape(text))),
            Block::Paragraph(text) => out.push_str(&format!("<p>{}</p>\n", escape(text))),
            Block::Error(text) => {
                out.push_str(&format!("<p style=\"color:red;\">{}</p>\n", escape(text)))
            }
            Block::Status(text) => out.push_str(&format!(
                "<div class=\"status-message info\">{}</div>\n",
                escape(text)
            )),
            Block::Job { title, url } => out.push_str(&format!(
                "<div class=\"job-result-item\">\n  <h4>{}</h4>\n  <p>🔗 <a href=\"{}\" target=\"_blank\">{}</a></p>\n</div>\n",
                escape(title),
                escape(url),
                LINK_LABEL
            )),
        }
    }
    out
}

pub fn terminal(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Heading(text) => format!("\n{}", text.cyan().bold()),
            Block::Paragraph(text) => text.to_string(),
            Block::Error(text) => text.red().to_string(),
            Block::Status(text) => text.green().to_string(),
            Block::Job { title, url } => format!("  {}\n    🔗 {}", title.bold(), url.blue()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
