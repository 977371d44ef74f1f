//! Subjects and academic stages offered by the selection screen.
//!
//! Subject ids are what the menu hands back; topic keys are what the bank is
//! indexed by.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub id: &'static str,
    pub label: &'static str,
    pub topic_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicStage {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SUBJECTS: [Subject; 6] = [
    Subject { id: "history", label: "Universal History",    topic_key: "HISTORIA_UNIVERSAL" },
    Subject { id: "science", label: "Natural Sciences",     topic_key: "CIENCIAS_NATURALES" },
    Subject { id: "math",    label: "Mathematics",          topic_key: "MATEMATICAS" },
    Subject { id: "lit",     label: "Universal Literature", topic_key: "LITERATURA_UNIVERSAL" },
    Subject { id: "english", label: "English",              topic_key: "INGLES" },
    Subject { id: "prog",    label: "Programing",           topic_key: "PROGRAMACION" },
];

pub const ACADEMIC_STAGES: [AcademicStage; 5] = [
    AcademicStage { id: "eso",          label: "E.S.O." },
    AcademicStage { id: "bachillerato", label: "Baccalaureate" },
    AcademicStage { id: "universidad",  label: "University" },
    AcademicStage { id: "fp",           label: "Vocational Training" },
    AcademicStage { id: "master",       label: "Master" },
];

/// Label used for placeholder questions when a topic key has no subject.
pub const GENERIC_SUBJECT_LABEL: &str = "General Knowledge";

pub fn subject_by_id(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.id == id)
}

pub fn subject_by_key(topic_key: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.topic_key == topic_key)
}

pub fn stage_by_id(id: &str) -> Option<&'static AcademicStage> {
    ACADEMIC_STAGES.iter().find(|s| s.id == id)
}

/// Human label for a topic key, falling back to [`GENERIC_SUBJECT_LABEL`].
pub fn topic_label(topic_key: &str) -> &'static str {
    subject_by_key(topic_key).map_or(GENERIC_SUBJECT_LABEL, |s| s.label)
}
