use std::collections::HashMap;

use tracing::error;

use crate::domain::entities::{
    language::Language,
    resume::{BaseInfo, Education, Experience, Project, ResumeDocument, Skill},
};
use crate::errors::StoreError;

/// Language the editor opens in before any switch.
pub const DEFAULT_LANGUAGE: Language = Language::Pt;

/// A typed full-section replace. One variant per top-level resume
/// section; there is no string-addressed update and no sentinel key
/// for whole-document replacement (see [`DocumentStore::replace_document`]).
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    BaseInfo(BaseInfo),
    ProfessionalSummary(String),
    TechnicalSkills(Vec<Skill>),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Certifications(Vec<String>),
    Projects(Vec<Project>),
    Languages(Vec<String>),
}

impl SectionUpdate {
    fn apply(self, doc: &mut ResumeDocument) {
        match self {
            SectionUpdate::BaseInfo(v) => doc.base_info = v,
            SectionUpdate::ProfessionalSummary(v) => doc.professional_summary = v,
            SectionUpdate::TechnicalSkills(v) => doc.technical_skills = v,
            SectionUpdate::Experience(v) => doc.experience = v,
            SectionUpdate::Education(v) => doc.education = v,
            SectionUpdate::Certifications(v) => doc.certifications = v,
            SectionUpdate::Projects(v) => doc.projects = v,
            SectionUpdate::Languages(v) => doc.languages = v,
        }
    }
}

/// In-memory holder for both language variants of the resume plus the
/// active-language selector. Owned by the application entry point and
/// passed by reference to collaborators; it is not a global.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: HashMap<Language, ResumeDocument>,
    active: Language,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            documents: HashMap::new(),
            active: DEFAULT_LANGUAGE,
        }
    }

    pub fn active_language(&self) -> Language {
        self.active
    }

    /// Document for the active language. Absent only before the first
    /// load installed anything.
    pub fn document(&self) -> Option<&ResumeDocument> {
        self.documents.get(&self.active)
    }

    pub fn document_for(&self, lang: Language) -> Option<&ResumeDocument> {
        self.documents.get(&lang)
    }

    pub fn documents(&self) -> &HashMap<Language, ResumeDocument> {
        &self.documents
    }

    /// Switches the active language. An unsupported code is rejected:
    /// the error is logged and the prior selector is returned unchanged.
    /// No document data is touched either way.
    pub fn switch_language(&mut self, code: &str) -> Language {
        match code.parse::<Language>() {
            Ok(lang) => {
                self.active = lang;
                lang
            }
            Err(_) => {
                error!("invalid language code: {code:?}");
                self.active
            }
        }
    }

    /// Replaces one section of the active document. Fails without
    /// mutating anything when no document has been installed yet.
    pub fn update_section(&mut self, update: SectionUpdate) -> Result<(), StoreError> {
        let Some(doc) = self.documents.get_mut(&self.active) else {
            error!("no resume document loaded for {}", self.active);
            return Err(StoreError::NoActiveDocument(self.active));
        };
        update.apply(doc);
        Ok(())
    }

    /// Wholesale replacement of the active document, e.g. from an
    /// uploaded file. This is the one supported whole-document path.
    pub fn replace_document(&mut self, doc: ResumeDocument) {
        self.documents.insert(self.active, doc);
    }

    /// Installs a document for an explicit language, used by the
    /// persistence client during initialization.
    pub fn install(&mut self, lang: Language, doc: ResumeDocument) {
        self.documents.insert(lang, doc);
    }

    /// "New resume": replaces the active document with the default
    /// empty shape.
    pub fn reset_to_default(&mut self) {
        self.replace_document(ResumeDocument::default());
    }

    /// Replaces the active document from uploaded JSON text. Absent
    /// fields merge with defaults; malformed JSON leaves the current
    /// document untouched.
    pub fn replace_from_json(&mut self, text: &str) -> Result<(), StoreError> {
        let doc = ResumeDocument::from_json(text).map_err(StoreError::MalformedDocument)?;
        self.replace_document(doc);
        Ok(())
    }

    /// Serializes one language's document to pretty JSON for download.
    pub fn export_json(&self, lang: Language) -> Result<String, StoreError> {
        let doc = self
            .documents
            .get(&lang)
            .ok_or(StoreError::NoDocument(lang))?;
        doc.to_pretty_json()
            .map_err(StoreError::MalformedDocument)
    }
}
