use crate::keywords::{extract_keywords, KeywordSet};

/// Keyword signature of a template: its title and description joined by a space.
pub fn template_keywords(title: &str, description: &str) -> KeywordSet {
    extract_keywords(&format!("{title} {description}"))
}

/// Number of keywords shared by a submission and a template.
pub fn score_template(submission: &KeywordSet, title: &str, description: &str) -> usize {
    let template = template_keywords(title, description);
    submission.intersection(&template).count()
}
