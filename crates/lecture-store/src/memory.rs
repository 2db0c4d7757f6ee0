//! In-memory implementation of LectureStore
//!
//! All tables live behind one `RwLock`; every operation takes the lock for a
//! short synchronous critical section and never holds it across an `.await`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use lecture_core::entities::{Decision, Lecture, Reaction, Section, SectionStats, Suggestion};
use lecture_core::error::DomainError;
use lecture_core::traits::{LectureStore, RepoResult};

use crate::seed::demo_lectures;

/// Stats are keyed per lecture so equal section IDs in different lectures never mix
type SectionKey = (String, String);

#[derive(Debug, Default)]
struct Tables {
    lectures: HashMap<String, Lecture>,
    reactions: Vec<Reaction>,
    suggestions: Vec<Suggestion>,
    stats: HashMap<SectionKey, SectionStats>,
}

impl Tables {
    fn lecture_mut(&mut self, lecture_id: &str) -> RepoResult<&mut Lecture> {
        self.lectures
            .get_mut(lecture_id)
            .ok_or_else(|| DomainError::LectureNotFound(lecture_id.to_string()))
    }

    fn ensure_section(&self, lecture_id: &str, section_id: &str) -> RepoResult<()> {
        let lecture = self
            .lectures
            .get(lecture_id)
            .ok_or_else(|| DomainError::LectureNotFound(lecture_id.to_string()))?;
        if lecture.section(section_id).is_none() {
            return Err(DomainError::section_not_found(lecture_id, section_id));
        }
        Ok(())
    }
}

/// Shared in-memory store
#[derive(Debug, Default)]
pub struct InMemoryLectureStore {
    tables: RwLock<Tables>,
}

impl InMemoryLectureStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given lectures
    ///
    /// # Errors
    /// Fails on duplicate lecture IDs or invalid section layouts
    pub fn with_lectures(lectures: impl IntoIterator<Item = Lecture>) -> RepoResult<Self> {
        let store = Self::new();
        for lecture in lectures {
            store.insert_lecture(lecture)?;
        }
        Ok(store)
    }

    /// Create a store seeded with the bundled demo lectures
    pub fn with_demo_content() -> Self {
        let lectures = demo_lectures()
            .into_iter()
            .map(|lecture| (lecture.id.clone(), lecture))
            .collect();

        Self {
            tables: RwLock::new(Tables {
                lectures,
                ..Tables::default()
            }),
        }
    }

    /// Add a lecture
    ///
    /// # Errors
    /// Returns `LectureAlreadyExists` for a duplicate ID, or a validation
    /// error when section IDs or order indices repeat.
    pub fn insert_lecture(&self, lecture: Lecture) -> RepoResult<()> {
        lecture.validate_sections()?;

        let mut tables = self.tables.write();
        if tables.lectures.contains_key(&lecture.id) {
            return Err(DomainError::LectureAlreadyExists(lecture.id));
        }

        debug!(lecture_id = %lecture.id, sections = lecture.sections.len(), "Lecture inserted");
        tables.lectures.insert(lecture.id.clone(), lecture);
        Ok(())
    }

    /// IDs of all stored lectures, sorted
    pub fn lecture_ids(&self) -> Vec<String> {
        let tables = self.tables.read();
        let mut ids: Vec<_> = tables.lectures.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Total number of reactions across all lectures
    pub fn reaction_count(&self) -> usize {
        self.tables.read().reactions.len()
    }

    /// Total number of suggestions across all lectures
    pub fn suggestion_count(&self) -> usize {
        self.tables.read().suggestions.len()
    }
}

#[async_trait]
impl LectureStore for InMemoryLectureStore {
    #[instrument(skip(self))]
    async fn get_lecture(&self, lecture_id: &str) -> RepoResult<Option<Lecture>> {
        Ok(self.tables.read().lectures.get(lecture_id).cloned())
    }

    #[instrument(skip(self))]
    async fn get_section(
        &self,
        lecture_id: &str,
        section_id: &str,
    ) -> RepoResult<Option<Section>> {
        let tables = self.tables.read();
        Ok(tables
            .lectures
            .get(lecture_id)
            .and_then(|lecture| lecture.section(section_id))
            .cloned())
    }

    #[instrument(skip(self, text))]
    async fn update_section_text(
        &self,
        lecture_id: &str,
        section_id: &str,
        text: &str,
    ) -> RepoResult<Section> {
        let mut tables = self.tables.write();
        let section = tables
            .lecture_mut(lecture_id)?
            .section_mut(section_id)
            .ok_or_else(|| DomainError::section_not_found(lecture_id, section_id))?;

        section.text = text.to_string();
        Ok(section.clone())
    }

    #[instrument(skip(self))]
    async fn set_published(&self, lecture_id: &str, at: DateTime<Utc>) -> RepoResult<Lecture> {
        let mut tables = self.tables.write();
        let lecture = tables.lecture_mut(lecture_id)?;
        lecture.publish(at);
        Ok(lecture.clone())
    }

    #[instrument(skip(self))]
    async fn list_reactions(&self, lecture_id: &str) -> RepoResult<Vec<Reaction>> {
        let tables = self.tables.read();
        Ok(tables
            .reactions
            .iter()
            .filter(|reaction| reaction.lecture_id == lecture_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, reaction), fields(reaction_id = %reaction.id))]
    async fn append_reaction(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut tables = self.tables.write();
        tables.ensure_section(&reaction.lecture_id, &reaction.section_id)?;
        tables.reactions.push(reaction.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_suggestions(&self, lecture_id: &str) -> RepoResult<Vec<Suggestion>> {
        let tables = self.tables.read();
        Ok(tables
            .suggestions
            .iter()
            .filter(|suggestion| suggestion.lecture_id == lecture_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_suggestion(&self, suggestion_id: &str) -> RepoResult<Option<Suggestion>> {
        let tables = self.tables.read();
        Ok(tables
            .suggestions
            .iter()
            .find(|suggestion| suggestion.id == suggestion_id)
            .cloned())
    }

    #[instrument(skip(self, suggestion), fields(suggestion_id = %suggestion.id))]
    async fn append_suggestion(&self, suggestion: &Suggestion) -> RepoResult<()> {
        let mut tables = self.tables.write();
        tables.ensure_section(&suggestion.lecture_id, &suggestion.section_id)?;
        tables.suggestions.push(suggestion.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_suggestion_status(
        &self,
        suggestion_id: &str,
        decision: Decision,
    ) -> RepoResult<Suggestion> {
        let mut tables = self.tables.write();
        let suggestion = tables
            .suggestions
            .iter_mut()
            .find(|suggestion| suggestion.id == suggestion_id)
            .ok_or_else(|| DomainError::SuggestionNotFound(suggestion_id.to_string()))?;

        suggestion.resolve(decision)?;
        Ok(suggestion.clone())
    }

    #[instrument(skip(self))]
    async fn get_stats(&self, lecture_id: &str, section_id: &str) -> RepoResult<SectionStats> {
        let key = (lecture_id.to_string(), section_id.to_string());
        Ok(self
            .tables
            .read()
            .stats
            .get(&key)
            .copied()
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn update_stats(
        &self,
        lecture_id: &str,
        section_id: &str,
        decision: Decision,
    ) -> RepoResult<SectionStats> {
        let mut tables = self.tables.write();
        let stats = tables
            .stats
            .entry((lecture_id.to_string(), section_id.to_string()))
            .or_default();
        stats.record(decision);
        Ok(*stats)
    }
}
