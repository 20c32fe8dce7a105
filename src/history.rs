// ABOUTME: Lesson request and generation history for the lesson-deck application
// ABOUTME: Builds the upstream prompt and keeps a caller-owned log of generated decks

use crate::errors::DeckError;
use crate::paginate::{Deck, PresentationMeta};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How the lesson is meant to be taught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    ActivityBased,
    EnquiryBased,
    ExperimentalLearning,
    Content,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 4] = [
        DeliveryType::ActivityBased,
        DeliveryType::EnquiryBased,
        DeliveryType::ExperimentalLearning,
        DeliveryType::Content,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::ActivityBased => "Activity Based",
            DeliveryType::EnquiryBased => "Enquiry Based",
            DeliveryType::ExperimentalLearning => "Experimental Learning",
            DeliveryType::Content => "Content",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeliveryType {
    type Err = DeckError;

    /// Accepts the display label in any case, with spaces, dashes or underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|d| d.label().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| DeckError::ValidationError(format!("Unknown delivery type: {}", s)))
    }
}

/// The form values behind one generated lesson plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRequest {
    pub topic: String,
    pub grade: String,
    pub duration: String,
    pub delivery_type: DeliveryType,
}

impl LessonRequest {
    pub fn new(
        topic: impl Into<String>,
        grade: impl Into<String>,
        duration: impl Into<String>,
        delivery_type: DeliveryType,
    ) -> Self {
        Self {
            topic: topic.into(),
            grade: grade.into(),
            duration: duration.into(),
            delivery_type,
        }
    }

    /// Title slide metadata; the topic doubles as the subject
    pub fn meta(&self) -> PresentationMeta {
        PresentationMeta::new(&self.topic, &self.grade, &self.duration)
    }

    /// Prompt text sent to the text generation service
    pub fn prompt(&self) -> String {
        format!(
            "I'm a teacher for grade {}th, I want to teach about {} for {} minutes. \
             Generate a lesson plan with this Delivery Type: {} and add 10 questions and answers. \
             Based on the grade the questions must be challenging.",
            self.grade, self.topic, self.duration, self.delivery_type
        )
    }

    /// Base name for exported files, e.g. "Photosynthesis_Lesson_Plan"
    pub fn file_stem(&self) -> String {
        format!("{}_Lesson_Plan", self.topic)
    }
}

/// One generated deck and the request that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub request: LessonRequest,
    pub deck: Deck,
}

/// Append-only log of generated decks, owned by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated deck and return the new entry's id
    pub fn record(&mut self, request: LessonRequest, deck: Deck) -> Uuid {
        let id = Uuid::new_v4();
        debug!(
            "Recording history entry {} for {:?} ({} slides)",
            id,
            request.topic,
            deck.len()
        );
        self.entries.push(HistoryEntry {
            id,
            created_at: Utc::now(),
            request,
            deck,
        });
        id
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LessonRequest {
        LessonRequest::new("Photosynthesis", "7", "45", DeliveryType::EnquiryBased)
    }

    #[test]
    fn test_delivery_type_from_str() {
        assert_eq!(
            "Activity Based".parse::<DeliveryType>().unwrap(),
            DeliveryType::ActivityBased
        );
        assert_eq!(
            "experimental-learning".parse::<DeliveryType>().unwrap(),
            DeliveryType::ExperimentalLearning
        );
        assert_eq!("CONTENT".parse::<DeliveryType>().unwrap(), DeliveryType::Content);
        assert!("lecture".parse::<DeliveryType>().is_err());
    }

    #[test]
    fn test_prompt_mentions_form_values() {
        let prompt = request().prompt();
        assert!(prompt.contains("grade 7th"));
        assert!(prompt.contains("about Photosynthesis for 45 minutes"));
        assert!(prompt.contains("Delivery Type: Enquiry Based"));
    }

    #[test]
    fn test_meta_and_file_stem() {
        let req = request();
        assert_eq!(req.meta(), PresentationMeta::new("Photosynthesis", "7", "45"));
        assert_eq!(req.file_stem(), "Photosynthesis_Lesson_Plan");
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let mut history = History::new();
        assert!(history.latest().is_none());

        let first = history.record(request(), Deck::default());
        let second = history.record(
            LessonRequest::new("Fractions", "4", "30", DeliveryType::Content),
            Deck::default(),
        );

        assert_eq!(history.len(), 2);
        assert_ne!(first, second);
        assert_eq!(history.latest().map(|e| e.id), Some(second));
        assert_eq!(
            history.get(first).map(|e| e.request.topic.as_str()),
            Some("Photosynthesis")
        );
        let topics: Vec<&str> = history.iter().map(|e| e.request.topic.as_str()).collect();
        assert_eq!(topics, vec!["Photosynthesis", "Fractions"]);

        history.clear();
        assert!(history.is_empty());
    }
}
