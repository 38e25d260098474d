// output payloads handed to whatever draws the terminal
// the core never emits markup, only these variants
use crate::vfs::{DirEntry, NodeKind};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Visual intent of a line of text. Colours are the front-end's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Plain,
    Heading,
    Accent,
    Muted,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Renderable {
    Text { tone: Tone, text: String },
    Code { text: String },
    KeyValueList { title: Option<String>, pairs: Vec<Pair> },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Listing { entries: Vec<DirEntry> },
    Tree { root: TreeNode },
    Section { title: String, subtitle: Option<String>, body: Vec<Renderable> },
    Group { items: Vec<Renderable> },
}

impl Renderable {
    pub fn text(tone: Tone, text: impl Into<String>) -> Self {
        Renderable::Text { tone, text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(Tone::Plain, text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::text(Tone::Heading, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::text(Tone::Success, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::text(Tone::Muted, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::text(Tone::Error, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Renderable::Code { text: text.into() }
    }

    pub fn group(items: Vec<Renderable>) -> Self {
        Renderable::Group { items }
    }

    pub fn section(title: impl Into<String>, subtitle: Option<&str>, body: Vec<Renderable>) -> Self {
        Renderable::Section {
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            body,
        }
    }

    pub fn key_values<K, V>(title: Option<&str>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Renderable::KeyValueList {
            title: title.map(str::to_string),
            pairs: pairs
                .into_iter()
                .map(|(k, v)| Pair { key: k.into(), value: v.into() })
                .collect(),
        }
    }

    pub fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Renderable::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Tone of a bare text payload, used by callers that only care whether
    /// the command failed.
    pub fn tone(&self) -> Option<Tone> {
        match self {
            Renderable::Text { tone, .. } => Some(*tone),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone() == Some(Tone::Error)
    }
}

// plain text rendering - what the native repl prints
impl fmt::Display for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderable::Text { text, .. } | Renderable::Code { text } => f.write_str(text),
            Renderable::KeyValueList { title, pairs } => {
                let mut lines = Vec::new();
                if let Some(title) = title {
                    lines.push(title.clone());
                }
                let width = pairs.iter().map(|p| display_width(&p.key)).max().unwrap_or(0);
                for pair in pairs {
                    lines.push(format!("  {:<width$}  {}", format!("{}:", pair.key), pair.value, width = width + 1));
                }
                f.write_str(&lines.join("\n"))
            }
            Renderable::Table { headers, rows } => {
                let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
                for row in rows {
                    for (i, cell) in row.iter().enumerate() {
                        if i < widths.len() {
                            widths[i] = widths[i].max(display_width(cell));
                        }
                    }
                }
                let fmt_row = |cells: &[String]| {
                    let mut line = String::new();
                    for (i, cell) in cells.iter().enumerate() {
                        // std pads by char count too
                        let w = widths.get(i).copied().unwrap_or(0);
                        let _ = write!(line, "{:<w$}  ", cell, w = w);
                    }
                    line.trim_end().to_string()
                };
                let mut lines = vec![fmt_row(headers)];
                for row in rows {
                    lines.push(fmt_row(row));
                }
                f.write_str(&lines.join("\n"))
            }
            Renderable::Listing { entries } => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|e| match e.kind {
                        NodeKind::Directory => format!("{}/", e.name),
                        NodeKind::File => e.name.clone(),
                    })
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            Renderable::Tree { root } => {
                let mut out = root.name.clone();
                write_tree_children(&mut out, &root.children, "");
                f.write_str(&out)
            }
            Renderable::Section { title, subtitle, body } => {
                match subtitle {
                    Some(sub) => write!(f, "{} - {}", title, sub)?,
                    None => f.write_str(title)?,
                }
                for item in body {
                    for line in item.to_string().lines() {
                        write!(f, "\n  {}", line)?;
                    }
                }
                Ok(())
            }
            Renderable::Group { items } => {
                let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                f.write_str(&parts.join("\n"))
            }
        }
    }
}

// columns on screen, not bytes: `×` and box glyphs are multi-byte
fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn write_tree_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        let suffix = if child.kind == NodeKind::Directory { "/" } else { "" };
        let _ = write!(out, "\n{}{}{}{}", prefix, branch, child.name, suffix);
        let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
        write_tree_children(out, &child.children, &next);
    }
}

/// `2073600` -> `"2,073,600"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(2_073_600), "2,073,600");
    }

    #[test]
    fn section_indents_body_lines() {
        let r = Renderable::section(
            "ssg",
            Some("Static Site Generator"),
            vec![Renderable::plain("init\nbuild")],
        );
        assert_eq!(r.to_string(), "ssg - Static Site Generator\n  init\n  build");
    }

    #[test]
    fn tree_draws_branches() {
        let root = TreeNode {
            name: "/".into(),
            kind: NodeKind::Directory,
            children: vec![
                TreeNode {
                    name: "config".into(),
                    kind: NodeKind::Directory,
                    children: vec![TreeNode { name: "site.yaml".into(), kind: NodeKind::File, children: vec![] }],
                },
                TreeNode { name: "notes.md".into(), kind: NodeKind::File, children: vec![] },
            ],
        };
        let text = Renderable::Tree { root }.to_string();
        assert_eq!(text, "/\n├── config/\n│   └── site.yaml\n└── notes.md");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Renderable::error("boom")).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["tone"], "error");
        assert_eq!(json["text"], "boom");
    }

    #[test]
    fn table_columns_align_on_multibyte_cells() {
        let r = Renderable::table(
            &["Grid", "Cells"],
            vec![
                vec!["512×512".into(), "262,144".into()],
                vec!["1920×1080".into(), "2,073,600".into()],
            ],
        );
        assert_eq!(
            r.to_string(),
            "Grid       Cells\n512×512    262,144\n1920×1080  2,073,600"
        );
    }

    #[test]
    fn key_values_align() {
        let r = Renderable::key_values(Some("Grid"), [("Cells", "10"), ("Dimensions", "2×5")]);
        assert_eq!(r.to_string(), "Grid\n  Cells:       10\n  Dimensions:  2×5");
    }
}
