//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeCodeBlock, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use super::LinkResolver;
use crate::catalog::Direction;

/// Renders article markdown to HTML.
///
/// Works on comrak's syntax tree rather than its HTML output: links are
/// resolved on link nodes, and code nodes are replaced by highlighted
/// markup before formatting. Code is always laid out left-to-right, so in
/// right-to-left articles code blocks and inline code carry `dir="ltr"`.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    link_resolver: Option<LinkResolver>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Headings get anchor ids so `other.md#section` links land on them.
    /// Raw HTML passes through, since articles are authored content.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.header_ids = Some(String::new());
        options.parse.smart = true;
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            link_resolver: None,
        }
    }

    /// Creates renderer that rewrites links between articles.
    ///
    /// Relative links (`./other.md`, `../other.md#part`) naming a catalog
    /// article point at that article's URL afterwards.
    pub fn with_link_resolver(resolver: LinkResolver) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(resolver);
        renderer
    }

    /// Renders article markdown laid out in `direction`.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting or HTML formatting fails
    pub fn render(&self, content: &str, direction: Direction) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        for node in root.descendants() {
            self.transform(node, direction)?;
        }

        let mut html: Vec<u8> = Vec::with_capacity(content.len() * 2);
        format_html(root, &self.options, &mut html).context("Failed to format article HTML")?;
        String::from_utf8(html).context("Article HTML is not valid UTF-8")
    }

    fn transform<'n>(&self, node: &'n AstNode<'n>, direction: Direction) -> Result<()> {
        let mut data = node.data.borrow_mut();

        let replacement = match &mut data.value {
            NodeValue::Link(link) => {
                if let Some(resolver) = &self.link_resolver {
                    link.url = self.resolve(resolver, &link.url);
                }
                None
            }
            NodeValue::CodeBlock(block) => Some(NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: self.code_block(block, direction)?,
            })),
            NodeValue::Code(code) if direction == Direction::RightToLeft => Some(
                NodeValue::HtmlInline(format!("<code dir=\"ltr\">{}</code>", html_escape(&code.literal))),
            ),
            _ => None,
        };

        if let Some(value) = replacement {
            data.value = value;
        }
        Ok(())
    }

    fn resolve(&self, resolver: &LinkResolver, url: &str) -> String {
        match resolver.resolve(url, false) {
            Ok(resolved) => resolved,
            Err(err) => {
                debug!(link = url, error = %err, "link left unresolved");
                url.to_string()
            }
        }
    }

    /// Renders a fenced or indented code block as `<pre><code>`.
    ///
    /// The language comes from the first word of the info string. Blocks
    /// with no language, or one syntect does not know, are escaped as
    /// plain text.
    fn code_block(&self, block: &NodeCodeBlock, direction: Direction) -> Result<String> {
        let language = block.info.split_whitespace().next();

        let mut html = String::with_capacity(block.literal.len() * 2);
        html.push_str("<pre");
        if direction == Direction::RightToLeft {
            html.push_str(" dir=\"ltr\"");
        }
        html.push_str("><code");
        if let Some(language) = language {
            html.push_str(" class=\"language-");
            html.push_str(&html_escape(language));
            html.push('"');
        }
        html.push('>');
        html.push_str(&self.highlight(&block.literal, language)?);
        html.push_str("</code></pre>\n");
        Ok(html)
    }

    /// Highlights code with syntect using `hljs-` prefixed CSS classes.
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String> {
        let syntax = language.and_then(|language| {
            self.syntax_set
                .find_syntax_by_token(language)
                .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        });

        let Some(syntax) = syntax else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }
        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
