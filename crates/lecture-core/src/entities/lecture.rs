//! Lecture entity - a titled, ordered sequence of text sections

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Section entity - the smallest addressable unit of lecture text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    /// Display position, unique within the owning lecture
    pub order: u32,
    pub text: String,
}

impl Section {
    /// Create a new Section
    pub fn new(id: impl Into<String>, order: u32, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order,
            text: text.into(),
        }
    }
}

/// Lecture entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    pub sections: Vec<Section>,
    /// `None` while the lecture is still a draft
    pub published_at: Option<DateTime<Utc>>,
}

impl Lecture {
    /// Create a new draft lecture; sections are kept sorted by `order`
    pub fn new(id: impl Into<String>, title: impl Into<String>, mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|section| section.order);
        Self {
            id: id.into(),
            title: title.into(),
            sections,
            published_at: None,
        }
    }

    /// Find a section by ID
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    /// Find a section by ID for mutation
    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.id == section_id)
    }

    /// Check if the lecture has been published
    #[inline]
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Mark the lecture as published at the given time
    pub fn publish(&mut self, at: DateTime<Utc>) {
        self.published_at = Some(at);
    }

    /// Ensure section IDs and order indices are unique within the lecture
    pub fn validate_sections(&self) -> Result<(), DomainError> {
        let mut orders = HashSet::with_capacity(self.sections.len());
        let mut ids = HashSet::with_capacity(self.sections.len());

        for section in &self.sections {
            if !orders.insert(section.order) {
                return Err(DomainError::DuplicateSectionOrder {
                    lecture_id: self.id.clone(),
                    order: section.order,
                });
            }
            if !ids.insert(section.id.as_str()) {
                return Err(DomainError::ValidationError(format!(
                    "Duplicate section id {} in lecture {}",
                    section.id, self.id
                )));
            }
        }

        Ok(())
    }
}
