//! Rendering of entries to plain text or HTML via embedded templates.
//!
//! The templates come in three parts: one entry, the full entry list, and
//! an HTML layout wrapping the list into a standalone document. HTML
//! templates are auto-escaped by name.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tera::{Context, Tera};

use crate::history::Entry;

const ENTRY_TEXT: &str = r"{{ entry.request }}
**********************************************************
{% for response in entry.responses -%}
{{ response.lang }}:
{% for tr in response.translations -%}
{{ loop.index }}. {{ tr }}
{% endfor -%}
----------------------------------------------------------
{% endfor -%}
";

const LIST_TEXT: &str = r"{% for entry in entries -%}
{{ entry.request }}
{% endfor -%}
**********************************************************
{% for entry in entries %}
{%- include 'entry.txt' %}
{% endfor -%}
";

const ENTRY_HTML: &str = r#"<dt id="{{ idx }}">{{ entry.request }}</dt>
{% for response in entry.responses -%}
<dd>
	<header>{{ response.lang }}</header>
	<ol>
	{% for tr in response.translations -%}
	<li>{{ tr }}</li>
	{% endfor -%}
	</ol>
</dd>
{% endfor -%}
"#;

const LIST_HTML: &str = r##"<ul>
{% for entry in entries -%}
<li><a href="#{{ loop.index }}">{{ entry.request }}</a></li>
{% endfor -%}
</ul>
<dl>
{% for entry in entries -%}
{% set idx = loop.index -%}
{% include 'entry.html' %}
{% endfor -%}
</dl>
"##;

const LAYOUT_HTML: &str = r#"<html>
<head>
<meta charset="utf-8">
</head>
<body>
{% include 'list.html' %}
</body>
</html>
"#;

/// Output mode, picked from the destination file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    /// `.html` and `.htm` destinations get HTML; everything else text.
    pub fn from_path(path: &str) -> Self {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            .map_or(Self::Text, |_| Self::Html)
    }
}

/// Renders entries with the embedded templates in one output mode.
pub struct Renderer {
    tera: Tera,
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("entry.txt", ENTRY_TEXT),
            ("list.txt", LIST_TEXT),
            ("entry.html", ENTRY_HTML),
            ("list.html", LIST_HTML),
            ("layout.html", LAYOUT_HTML),
        ])
        .context("Failed to compile output templates")?;
        Ok(Self { tera, format })
    }

    /// Renders a single entry. `idx` is its 1-based position, used as the
    /// anchor id in HTML output.
    pub fn render_entry(&self, entry: &Entry, idx: usize) -> Result<String> {
        let mut context = Context::new();
        context.insert("entry", entry);
        context.insert("idx", &idx);

        let template = match self.format {
            OutputFormat::Text => "entry.txt",
            OutputFormat::Html => "entry.html",
        };
        self.tera
            .render(template, &context)
            .with_context(|| format!("Failed to render entry \"{}\"", entry.request))
    }

    /// Renders the full entry collection; in HTML mode the list is wrapped
    /// in the layout document.
    pub fn render_list(&self, entries: &[Arc<Entry>]) -> Result<String> {
        let borrowed: Vec<&Entry> = entries.iter().map(AsRef::as_ref).collect();
        let mut context = Context::new();
        context.insert("entries", &borrowed);

        let template = match self.format {
            OutputFormat::Text => "list.txt",
            OutputFormat::Html => "layout.html",
        };
        self.tera
            .render(template, &context)
            .context("Failed to render entry list")
    }
}
