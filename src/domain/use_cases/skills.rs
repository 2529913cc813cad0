use crate::domain::entities::resume::{MAX_STRENGTH, MIN_STRENGTH, Skill};
use crate::domain::use_cases::store::{DocumentStore, SectionUpdate};
use crate::errors::MutationError;

/// Strength applied when a new skill arrives without a usable rating.
pub const NEW_SKILL_STRENGTH: u8 = 3;

/// Structured input for skill creation and editing. Collecting it is
/// the caller's job (a form, a CLI); by the time it reaches the
/// mutator it is plain data, not DOM state.
#[derive(Debug, Clone, Default)]
pub struct SkillDraft {
    pub name: String,
    pub strength: Option<i64>,
    pub description: String,
}

fn resolve_strength(raw: Option<i64>, fallback: u8) -> u8 {
    raw.filter(|s| (MIN_STRENGTH as i64..=MAX_STRENGTH as i64).contains(s))
        .map(|s| s as u8)
        .unwrap_or(fallback)
}

fn current_skills(store: &DocumentStore) -> Result<Vec<Skill>, MutationError> {
    let doc = store
        .document()
        .ok_or(MutationError::NoDocument(store.active_language()))?;
    Ok(doc.technical_skills.clone())
}

/// Appends a skill to the active document. The name must be non-empty
/// after trimming; an absent or out-of-range strength becomes
/// [`NEW_SKILL_STRENGTH`]. The skills list is copied, extended, and
/// written back as a full-section replace.
pub fn add_skill(store: &mut DocumentStore, draft: SkillDraft) -> Result<(), MutationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(MutationError::EmptyName);
    }

    let mut skills = current_skills(store)?;
    skills.push(Skill {
        name: name.to_string(),
        strength: resolve_strength(draft.strength, NEW_SKILL_STRENGTH),
        description: draft.description.trim().to_string(),
    });
    store.update_section(SectionUpdate::TechnicalSkills(skills))?;
    Ok(())
}

/// Removes the skill at `index`. Out-of-bounds indices leave the list
/// untouched. Any "are you sure" confirmation happens before this is
/// called; the mutator only ever sees a committed decision.
pub fn remove_skill(store: &mut DocumentStore, index: usize) -> Result<(), MutationError> {
    let mut skills = current_skills(store)?;
    if index >= skills.len() {
        return Err(MutationError::IndexOutOfBounds {
            index,
            len: skills.len(),
        });
    }

    skills.remove(index);
    store.update_section(SectionUpdate::TechnicalSkills(skills))?;
    Ok(())
}

/// Replaces the skill at `index` with the draft. Name and description
/// are trimmed; an empty name aborts with the prior entry unchanged.
/// An absent or out-of-range strength becomes [`MIN_STRENGTH`].
pub fn edit_skill(
    store: &mut DocumentStore,
    index: usize,
    draft: SkillDraft,
) -> Result<(), MutationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(MutationError::EmptyName);
    }

    let mut skills = current_skills(store)?;
    if index >= skills.len() {
        return Err(MutationError::IndexOutOfBounds {
            index,
            len: skills.len(),
        });
    }

    skills[index] = Skill {
        name: name.to_string(),
        strength: resolve_strength(draft.strength, MIN_STRENGTH),
        description: draft.description.trim().to_string(),
    };
    store.update_section(SectionUpdate::TechnicalSkills(skills))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{language::Language, resume::ResumeDocument};

    fn store_with_skills(names: &[&str]) -> DocumentStore {
        let mut store = DocumentStore::new();
        let mut doc = ResumeDocument::default();
        for name in names {
            doc.technical_skills.push(Skill {
                name: name.to_string(),
                strength: 2,
                description: String::new(),
            });
        }
        store.install(Language::Pt, doc);
        store
    }

    fn skill_names(store: &DocumentStore) -> Vec<String> {
        store
            .document()
            .unwrap()
            .technical_skills
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }

    #[test]
    fn add_skill_appends_with_given_strength() {
        let mut store = store_with_skills(&[]);
        add_skill(
            &mut store,
            SkillDraft {
                name: "Go".into(),
                strength: Some(4),
                description: "backend".into(),
            },
        )
        .unwrap();

        let skills = &store.document().unwrap().technical_skills;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Go");
        assert_eq!(skills[0].strength, 4);
        assert_eq!(skills[0].description, "backend");
    }

    #[test]
    fn add_skill_defaults_out_of_range_strength() {
        let mut store = store_with_skills(&[]);
        add_skill(
            &mut store,
            SkillDraft {
                name: "X".into(),
                strength: Some(7),
                description: "d".into(),
            },
        )
        .unwrap();

        let strength = store.document().unwrap().technical_skills[0].strength;
        assert_eq!(strength, NEW_SKILL_STRENGTH);
        assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(&strength));
    }

    #[test]
    fn add_skill_defaults_missing_strength() {
        let mut store = store_with_skills(&[]);
        add_skill(
            &mut store,
            SkillDraft {
                name: "Y".into(),
                strength: None,
                description: String::new(),
            },
        )
        .unwrap();
        assert_eq!(
            store.document().unwrap().technical_skills[0].strength,
            NEW_SKILL_STRENGTH
        );
    }

    #[test]
    fn add_skill_rejects_blank_name() {
        let mut store = store_with_skills(&["existing"]);
        let result = add_skill(
            &mut store,
            SkillDraft {
                name: "   ".into(),
                strength: Some(3),
                description: String::new(),
            },
        );
        assert!(matches!(result, Err(MutationError::EmptyName)));
        assert_eq!(skill_names(&store), vec!["existing"]);
    }

    #[test]
    fn remove_skill_out_of_bounds_leaves_list_unchanged() {
        let mut store = store_with_skills(&["a", "b", "c"]);
        let result = remove_skill(&mut store, 3);
        assert!(matches!(
            result,
            Err(MutationError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert_eq!(skill_names(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_skill_preserves_relative_order() {
        let mut store = store_with_skills(&["a", "b", "c", "d"]);
        remove_skill(&mut store, 1).unwrap();
        assert_eq!(skill_names(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn edit_skill_trims_and_replaces_in_place() {
        let mut store = store_with_skills(&["a", "b"]);
        edit_skill(
            &mut store,
            1,
            SkillDraft {
                name: "  Rust  ".into(),
                strength: Some(5),
                description: "  systems  ".into(),
            },
        )
        .unwrap();

        let skills = &store.document().unwrap().technical_skills;
        assert_eq!(skills[0].name, "a");
        assert_eq!(skills[1].name, "Rust");
        assert_eq!(skills[1].strength, 5);
        assert_eq!(skills[1].description, "systems");
    }

    #[test]
    fn edit_skill_empty_name_leaves_entry_unchanged() {
        let mut store = store_with_skills(&["a"]);
        let result = edit_skill(
            &mut store,
            0,
            SkillDraft {
                name: "  ".into(),
                strength: Some(5),
                description: "ignored".into(),
            },
        );
        assert!(matches!(result, Err(MutationError::EmptyName)));

        let skill = &store.document().unwrap().technical_skills[0];
        assert_eq!(skill.name, "a");
        assert_eq!(skill.strength, 2);
    }

    #[test]
    fn edit_skill_defaults_invalid_strength_to_minimum() {
        let mut store = store_with_skills(&["a"]);
        edit_skill(
            &mut store,
            0,
            SkillDraft {
                name: "a".into(),
                strength: Some(0),
                description: String::new(),
            },
        )
        .unwrap();
        assert_eq!(store.document().unwrap().technical_skills[0].strength, MIN_STRENGTH);
    }

    #[test]
    fn mutations_require_a_loaded_document() {
        let mut store = DocumentStore::new();
        let result = add_skill(
            &mut store,
            SkillDraft {
                name: "Go".into(),
                strength: Some(3),
                description: String::new(),
            },
        );
        assert!(matches!(result, Err(MutationError::NoDocument(Language::Pt))));
    }
}
