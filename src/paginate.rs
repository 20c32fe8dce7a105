// ABOUTME: Slide pagination module for the lesson-deck application
// ABOUTME: Lays out an outline as a title slide plus reflowed content slides

use crate::errors::{DeckError, Result};
use crate::outline::{Outline, Section};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PALETTE: [&str; 4] = ["600080", "008000", "FFFFFF", "808080"];
pub const DEFAULT_TITLE_COLOR: &str = "002060";

/// Gap between the reserved title band and the first content line
const TITLE_GAP: f64 = 1.5;

/// Vertical budget and styling used when laying out slides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub max_content_height: f64,
    pub title_reserved_height: f64,
    pub line_height: f64,
    /// Overrides the derived `title_reserved_height + 1.5` start position
    pub start_y: Option<f64>,
    pub color_palette: Vec<String>,
    pub title_color: String,
    pub content_font_size: u32,
    pub title_font_size: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_content_height: 5.0,
            title_reserved_height: 1.0,
            line_height: 0.7,
            start_y: None,
            color_palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            title_color: DEFAULT_TITLE_COLOR.to_string(),
            content_font_size: 18,
            title_font_size: 24,
        }
    }
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_content_height(mut self, height: f64) -> Self {
        self.max_content_height = height;
        self
    }

    pub fn with_title_reserved_height(mut self, height: f64) -> Self {
        self.title_reserved_height = height;
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    pub fn with_start_y(mut self, y: f64) -> Self {
        self.start_y = Some(y);
        self
    }

    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_palette = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = color.into();
        self
    }

    pub fn with_font_sizes(mut self, content: u32, title: u32) -> Self {
        self.content_font_size = content;
        self.title_font_size = title;
        self
    }

    /// Vertical position of the first content line on every slide
    pub fn start_y(&self) -> f64 {
        self.start_y.unwrap_or(self.title_reserved_height + TITLE_GAP)
    }

    /// Background color for the section at `index`, cycling through the palette
    pub fn section_color(&self, index: usize) -> &str {
        &self.color_palette[index % self.color_palette.len()]
    }

    /// Reject layouts that would stall or never terminate the reflow loop
    pub fn validate(&self) -> Result<()> {
        if !(self.line_height > 0.0) {
            return Err(DeckError::ConfigError(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        if !(self.max_content_height > self.title_reserved_height) {
            return Err(DeckError::ConfigError(format!(
                "max content height ({}) must exceed the title reserved height ({})",
                self.max_content_height, self.title_reserved_height
            )));
        }
        if !self.start_y().is_finite() {
            return Err(DeckError::ConfigError(format!(
                "start position must be finite, got {}",
                self.start_y()
            )));
        }
        if self.color_palette.is_empty() {
            return Err(DeckError::ConfigError(
                "color palette must contain at least one color".to_string(),
            ));
        }
        if let Some(color) = self
            .color_palette
            .iter()
            .find(|c| c.eq_ignore_ascii_case(&self.title_color))
        {
            return Err(DeckError::ConfigError(format!(
                "color palette reuses the reserved title color {}",
                color
            )));
        }
        Ok(())
    }
}

/// Caller-supplied form values shown on the title slide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationMeta {
    pub subject: String,
    pub grade: String,
    pub duration: String,
}

impl PresentationMeta {
    pub fn new(
        subject: impl Into<String>,
        grade: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            grade: grade.into(),
            duration: duration.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
}

/// One physical slide, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDescriptor {
    pub kind: SlideKind,
    pub heading: String,
    pub lines: Vec<String>,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PresentationMeta>,
    /// Index of the outline section a content slide was laid out from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_index: Option<usize>,
}

impl SlideDescriptor {
    fn title(outline: &Outline, meta: &PresentationMeta, layout: &Layout) -> Self {
        Self {
            kind: SlideKind::Title,
            heading: outline.title.clone(),
            lines: vec![outline.introduction.clone()],
            background_color: layout.title_color.clone(),
            metadata: Some(meta.clone()),
            section_index: None,
        }
    }

    fn content(heading: &str, color: &str, section_index: usize) -> Self {
        Self {
            kind: SlideKind::Content,
            heading: heading.to_string(),
            lines: Vec::new(),
            background_color: color.to_string(),
            metadata: None,
            section_index: Some(section_index),
        }
    }

    pub fn is_title(&self) -> bool {
        self.kind == SlideKind::Title
    }
}

/// Ordered slides produced by [`paginate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub slides: Vec<SlideDescriptor>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideDescriptor> {
        self.slides.iter()
    }

    pub fn title_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.first().filter(|s| s.is_title())
    }

    /// Content slides laid out from the section at `index`, in order
    pub fn section_slides(&self, index: usize) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides
            .iter()
            .filter(move |s| s.section_index == Some(index))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl IntoIterator for Deck {
    type Item = SlideDescriptor;
    type IntoIter = std::vec::IntoIter<SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideDescriptor;
    type IntoIter = std::slice::Iter<'a, SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Lay out an outline as a deck: one title slide, then each section's
/// body reflowed across as many slides as the vertical budget requires.
pub fn paginate(outline: &Outline, meta: &PresentationMeta, layout: &Layout) -> Result<Deck> {
    layout.validate()?;

    let start_y = layout.start_y();
    if start_y + layout.line_height > layout.max_content_height {
        warn!(
            "Start position {} leaves room for one line per slide (max height {})",
            start_y, layout.max_content_height
        );
    }

    info!(
        "Paginating {:?}: {} sections",
        outline.title,
        outline.sections.len()
    );

    let mut slides = vec![SlideDescriptor::title(outline, meta, layout)];
    for (index, section) in outline.sections.iter().enumerate() {
        let before = slides.len();
        reflow_section(section, index, layout, &mut slides);
        debug!(
            "Section {} {:?} laid out on {} slide(s)",
            index,
            section.heading,
            slides.len() - before
        );
    }

    info!("Deck ready with {} slides", slides.len());
    Ok(Deck { slides })
}

fn reflow_section(
    section: &Section,
    index: usize,
    layout: &Layout,
    slides: &mut Vec<SlideDescriptor>,
) {
    let color = layout.section_color(index);
    let start_y = layout.start_y();

    let mut current = SlideDescriptor::content(&section.heading, color, index);
    if section.body.is_empty() {
        slides.push(current);
        return;
    }

    let mut y = start_y;
    for line in section.body.split('\n') {
        if !current.lines.is_empty() && y + layout.line_height > layout.max_content_height {
            let next = SlideDescriptor::content(&section.heading, color, index);
            slides.push(std::mem::replace(&mut current, next));
            y = start_y;
        }
        current.lines.push(line.to_string());
        y += layout.line_height;
    }
    slides.push(current);
}
