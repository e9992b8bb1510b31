/// Ranking of templates and merging of their checklist items into the
/// baseline checklist.
use std::collections::HashSet;

use tracing::debug;

use crate::keywords::extract_keywords;
use crate::model::{ChecklistResult, Template, TemplateMatch};
use crate::score::score_template;

/// Always present, in this order, at the start of every checklist.
pub const BASELINE_CHECKLIST: [&str; 5] = [
    "Título claro y descriptivo",
    "Descripción con contexto",
    "Código probado y funcional",
    "Documentación actualizada",
    "Cumple con estándares del proyecto",
];

/// Ordered list with O(1) membership checks. First insertion wins.
#[derive(Debug, Default)]
struct SeenList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl SeenList {
    fn with_baseline() -> Self {
        let mut list = Self::default();
        for item in BASELINE_CHECKLIST {
            list.push(item);
        }
        list
    }

    /// Returns `true` if the item was appended.
    fn push(&mut self, item: &str) -> bool {
        if item.is_empty() || self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.to_string());
        self.items.push(item.to_string());
        true
    }

    fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Score every template against the submission and return the matches,
/// highest score first. Templates with a zero score or no checklist items
/// are skipped. Equal scores keep their relative input order.
pub fn rank_templates(title: &str, description: &str, templates: &[Template]) -> Vec<TemplateMatch> {
    let submission = extract_keywords(&format!("{title} {description}"));
    debug!(keywords = ?submission, "submission keywords");

    let mut matches: Vec<TemplateMatch> = templates
        .iter()
        .filter_map(|tpl| {
            let score = score_template(&submission, &tpl.title, &tpl.description);
            debug!(
                template = %tpl.title,
                score,
                checklist_len = tpl.checklist.len(),
                "scored template"
            );
            (score > 0 && !tpl.checklist.is_empty()).then(|| TemplateMatch {
                template_title: tpl.title.clone(),
                score,
                added: tpl.checklist.clone(),
            })
        })
        .collect();

    // `sort_by` is stable.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

pub fn merge(
    title: &str,
    description: &str,
    templates: &[Template],
    system_prompt: &str,
) -> ChecklistResult {
    let matches = rank_templates(title, description, templates);
    debug!(match_count = matches.len(), "templates matched");

    let mut merged = SeenList::with_baseline();
    for m in &matches {
        for item in &m.added {
            if merged.push(item) {
                debug!(template = %m.template_title, item = %item, "checklist item added");
            }
        }
    }

    let checklist = merged.into_items();
    debug!(checklist_len = checklist.len(), "checklist merged");

    ChecklistResult {
        title: title.to_string(),
        description: description.to_string(),
        checklist,
        matched_templates: matches,
        prompt_used: system_prompt.to_string(),
    }
}
