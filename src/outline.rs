// ABOUTME: Outline parsing module for the lesson-deck application
// ABOUTME: Splits raw lesson-plan text into a title, an introduction and sections

use log::debug;
use serde::{Deserialize, Serialize};

/// Structured decomposition of a lesson plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    pub introduction: String,
    pub sections: Vec<Section>,
}

/// A heading line plus the body text that follows it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    fn from_lines(heading: &str, body: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            body: trim_blank_lines(body).join("\n"),
        }
    }
}

/// A heading is any non-empty line starting with an ASCII uppercase letter.
///
/// This also matches ordinary capitalized sentences. The generated text is
/// expected to put every subtopic on its own capitalized line and body lines
/// are expected to start otherwise (bullets, numbers, indentation).
pub fn is_heading(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Parse raw lesson text into an outline. Never fails.
pub fn parse(raw: &str) -> Outline {
    let lines: Vec<&str> = raw.split('\n').collect();

    let title = lines[0].to_string();
    let mut introduction = String::new();

    // Everything before the first heading belongs to the introduction
    let mut idx = 1;
    while idx < lines.len() && !is_heading(lines[idx]) {
        introduction.push_str(lines[idx]);
        introduction.push('\n');
        idx += 1;
    }

    let mut sections = Vec::new();
    let mut heading: Option<&str> = None;
    let mut body: Vec<&str> = Vec::new();

    for &line in &lines[idx..] {
        if is_heading(line) {
            if let Some(current) = heading.take() {
                sections.push(Section::from_lines(current, &body));
            }
            heading = Some(line);
            body.clear();
        } else {
            body.push(line);
        }
    }

    if let Some(current) = heading {
        sections.push(Section::from_lines(current, &body));
    }

    debug!(
        "Parsed outline {:?}: {} sections, {} introduction bytes",
        title,
        sections.len(),
        introduction.len()
    );

    Outline {
        title,
        introduction,
        sections,
    }
}

/// Drop blank lines from both ends, keeping interior lines verbatim
fn trim_blank_lines<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_rule() {
        assert!(is_heading("Energy Flow"));
        assert!(is_heading("A"));
        assert!(!is_heading(""));
        assert!(!is_heading("energy flow"));
        assert!(!is_heading("  Indented Heading"));
        assert!(!is_heading("1. Step one"));
        assert!(!is_heading("- bullet"));
        assert!(!is_heading("Ébauche"));
    }

    #[test]
    fn test_trim_blank_lines() {
        let lines = ["", "  ", "a", "", "b", "\t", ""];
        assert_eq!(trim_blank_lines(&lines), &["a", "", "b"]);

        let blank = ["", " "];
        assert!(trim_blank_lines(&blank).is_empty());
        assert!(trim_blank_lines(&[] as &[&str]).is_empty());
    }

    #[test]
    fn test_parse_degenerate_input() {
        assert_eq!(parse(""), Outline::default());

        let single = parse("Only a title");
        assert_eq!(single.title, "Only a title");
        assert_eq!(single.introduction, "");
        assert!(single.sections.is_empty());
    }

    #[test]
    fn test_parse_without_headings() {
        let outline = parse("Fractions\nhalves and quarters\nthirds too");
        assert_eq!(outline.title, "Fractions");
        assert_eq!(outline.introduction, "halves and quarters\nthirds too\n");
        assert!(outline.sections.is_empty());
    }

    #[test]
    fn test_parse_keeps_heading_text_verbatim() {
        let outline = parse("Title\nObjectives:  \n- one\n");
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].heading, "Objectives:  ");
        assert_eq!(outline.sections[0].body, "- one");
    }

    #[test]
    fn test_parse_consecutive_headings() {
        let outline = parse("Title\nFirst\nSecond\n- body");
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[0].body, "");
        assert_eq!(outline.sections[1].heading, "Second");
        assert_eq!(outline.sections[1].body, "- body");
    }

    #[test]
    fn test_parse_title_is_first_line_even_when_blank() {
        let outline = parse("\nLead\nx\n");
        assert_eq!(outline.title, "");
        assert_eq!(outline.introduction, "");
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].heading, "Lead");
        assert_eq!(outline.sections[0].body, "x");
    }

    #[test]
    fn test_parse_introduction_keeps_indentation() {
        let outline = parse("T\n  note\nH");
        assert_eq!(outline.introduction, "  note\n");
        assert_eq!(outline.sections[0].heading, "H");
    }
}
