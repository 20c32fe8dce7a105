// ABOUTME: HTML generation module for the lesson-deck application
// ABOUTME: Renders a paginated deck as print-friendly HTML slides

use crate::errors::{DeckError, Result};
use crate::paginate::{Deck, Layout, SlideDescriptor, SlideKind};
use crate::utils;
use log::info;
use std::fs;
use std::path::Path;

const TEXT_COLOR: &str = "363636";

const BASE_CSS: &str = "body { margin: 0; font-family: Arial, sans-serif; }
.slide { width: 10in; height: 5.625in; box-sizing: border-box; padding: 0.5in 1in; \
page-break-after: always; break-after: page; overflow: hidden; }
.slide.title { text-align: center; padding-top: 1.5in; }
.slide ul { margin: 0; padding-left: 1.2em; }
.intro { white-space: pre-wrap; }";

/// Render a deck as a standalone HTML document, one section per slide
pub fn generate_html(deck: &Deck, layout: &Layout) -> String {
    let title = deck
        .title_slide()
        .map(|s| s.heading.as_str())
        .unwrap_or("Lesson Plan");
    info!("Generating HTML for {:?} ({} slides)", title, deck.len());

    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(&format!("<title>{}</title>\n", escape(title)));
    html_doc.push_str(&format!(
        "<style>\n{}\n.slide {{ color: #{}; }}\n.slide h1 {{ font-size: {}pt; }}\n\
         .slide p, .slide li {{ font-size: {}pt; }}\n</style>\n",
        BASE_CSS, TEXT_COLOR, layout.title_font_size, layout.content_font_size
    ));
    html_doc.push_str("</head>\n<body>\n");

    for slide in deck {
        html_doc.push_str(&render_slide(slide));
    }

    html_doc.push_str("</body>\n</html>\n");
    html_doc
}

fn render_slide(slide: &SlideDescriptor) -> String {
    let mut out = format!(
        "<section class=\"slide {}\" style=\"background-color: #{};\">\n",
        match slide.kind {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
        },
        escape(&slide.background_color)
    );

    match slide.kind {
        SlideKind::Title => {
            out.push_str(&format!("<h1>Lesson: {}</h1>\n", escape(&slide.heading)));
            if let Some(meta) = &slide.metadata {
                out.push_str(&format!("<p>Time: {}</p>\n", escape(&meta.duration)));
                out.push_str(&format!("<p>Grade: {}</p>\n", escape(&meta.grade)));
                out.push_str(&format!("<p>Subject: {}</p>\n", escape(&meta.subject)));
            }
            let intro = slide.lines.join("\n");
            if !intro.trim().is_empty() {
                out.push_str(&format!("<p class=\"intro\">{}</p>\n", escape(intro.trim())));
            }
        }
        SlideKind::Content => {
            out.push_str(&format!("<h1>{}</h1>\n", escape(&slide.heading)));
            if !slide.lines.is_empty() {
                out.push_str("<ul>\n");
                for line in &slide.lines {
                    // Blank lines keep their slot so the layout matches the reflow budget
                    if line.trim().is_empty() {
                        out.push_str("<li>&nbsp;</li>\n");
                    } else {
                        out.push_str(&format!("<li>{}</li>\n", escape(line)));
                    }
                }
                out.push_str("</ul>\n");
            }
        }
    }

    out.push_str("</section>\n");
    out
}

/// Escape text for use in HTML element content and attribute values
fn escape(text: &str) -> String {
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

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content).map_err(DeckError::FileReadError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_render_content_slide() {
        let slide = SlideDescriptor {
            kind: SlideKind::Content,
            heading: "Energy <Flow>".to_string(),
            lines: vec!["- sunlight".to_string(), "".to_string()],
            background_color: "008000".to_string(),
            metadata: None,
            section_index: Some(1),
        };
        let html = render_slide(&slide);
        assert!(html.contains("class=\"slide content\""));
        assert!(html.contains("background-color: #008000;"));
        assert!(html.contains("<h1>Energy &lt;Flow&gt;</h1>"));
        assert!(html.contains("<li>- sunlight</li>"));
        assert!(html.contains("<li>&nbsp;</li>"));
    }

    #[test]
    fn test_render_heading_only_slide_has_no_list() {
        let slide = SlideDescriptor {
            kind: SlideKind::Content,
            heading: "Summary".to_string(),
            lines: Vec::new(),
            background_color: "808080".to_string(),
            metadata: None,
            section_index: Some(0),
        };
        assert!(!render_slide(&slide).contains("<ul>"));
    }
}
