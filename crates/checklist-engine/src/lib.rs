//! Template-matching checklist engine.
//!
//! Turns a submission title and description into a review checklist: the
//! fixed baseline followed by the items of every template whose keyword
//! signature overlaps the submission, best matches first.
//!
//! The engine is synchronous and keeps no state between calls. The template
//! collection is borrowed from a [`PromptSnapshot`] for the duration of one
//! call, so identical inputs always produce identical results.

pub mod keywords;
pub mod merge;
pub mod model;
pub mod score;

pub use keywords::{extract_keywords, KeywordSet};
pub use merge::{merge, rank_templates, BASELINE_CHECKLIST};
pub use model::{ChecklistResult, PromptSnapshot, Template, TemplateMatch, DEFAULT_SYSTEM_PROMPT};
pub use score::score_template;

/// Build the checklist for one submission against a configuration snapshot.
pub fn build_checklist(title: &str, description: &str, prompt: &PromptSnapshot) -> ChecklistResult {
    tracing::debug!(
        title_len = title.len(),
        description_len = description.len(),
        templates = prompt.few_shots.len(),
        "building checklist"
    );
    merge(title, description, &prompt.few_shots, &prompt.system)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bug_fix_snapshot() -> PromptSnapshot {
        PromptSnapshot {
            system: "Eres SENA-Mate".to_string(),
            few_shots: vec![Template::new(
                "Bug fix",
                "corrección de errores de login y autenticación",
                ["Verificar logs de error", "Probar autenticación"],
            )],
        }
    }

    #[test]
    fn login_bug_fix_end_to_end() {
        let result = build_checklist(
            "Arreglo de bug en login",
            "Se corrigió un error de autenticación en el formulario de login",
            &bug_fix_snapshot(),
        );

        assert_eq!(result.matched_templates.len(), 1);
        assert_eq!(result.matched_templates[0].template_title, "Bug fix");
        assert!(result.matched_templates[0].score >= 2);

        let mut expected: Vec<String> = BASELINE_CHECKLIST.iter().map(|s| s.to_string()).collect();
        expected.push("Verificar logs de error".to_string());
        expected.push("Probar autenticación".to_string());
        assert_eq!(result.checklist, expected);
        assert_eq!(result.prompt_used, "Eres SENA-Mate");
        assert_eq!(result.title, "Arreglo de bug en login");
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let snapshot = PromptSnapshot {
            system: String::new(),
            few_shots: vec![
                Template::new("Login", "autenticación", ["a", "b"]),
                Template::new("Token", "login token", ["b", "c"]),
                Template::new("Docs", "readme", ["d"]),
            ],
        };
        let first = build_checklist("login con token", "autenticación rota", &snapshot);
        let second = build_checklist("login con token", "autenticación rota", &snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn baseline_always_leads() {
        let snapshot = bug_fix_snapshot();
        for (title, description) in [
            ("", ""),
            ("Arreglo de bug en login", "autenticación"),
            ("Nueva vista", "Agrega una pantalla de reportes"),
        ] {
            let result = build_checklist(title, description, &snapshot);
            assert_eq!(&result.checklist[..BASELINE_CHECKLIST.len()], &BASELINE_CHECKLIST);
        }
    }

    #[test]
    fn default_snapshot_reports_placeholder_prompt() {
        let result = build_checklist("título", "descripción", &PromptSnapshot::default());
        assert_eq!(result.prompt_used, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(result.checklist.len(), BASELINE_CHECKLIST.len());
    }
}
