/// Loading of the prompt configuration file (`prompt.json`).
///
/// Expected shape:
/// `{ "system": "...", "few_shots": [ { "title", "description", "checklist": [...] } ] }`
///
/// Loading never fails: every problem is logged and replaced by a default so
/// the engine always receives a usable snapshot.
use std::path::Path;

use checklist_engine::PromptSnapshot;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CommonError;

pub const MISSING_FILE_SYSTEM_PROMPT: &str = "SENA-Mate (prompt por defecto)";
pub const MISSING_KEY_SYSTEM_PROMPT: &str = "SENA-Mate (sin 'system' en prompt.json)";

/// Load the prompt snapshot at `path`, substituting defaults on any error.
pub fn load_prompt(path: &Path) -> PromptSnapshot {
    info!(path = %path.display(), "loading prompt");
    if !path.exists() {
        info!(path = %path.display(), "prompt file not found, using default prompt");
        return PromptSnapshot {
            system: MISSING_FILE_SYSTEM_PROMPT.to_string(),
            few_shots: Vec::new(),
        };
    }

    match read_prompt(path) {
        Ok(snapshot) => {
            info!(few_shots = snapshot.few_shots.len(), "prompt loaded");
            snapshot
        }
        Err(e) => {
            warn!(error = %e, "failed to load prompt, using empty template set");
            PromptSnapshot {
                system: format!("SENA-Mate (error leyendo prompt.json: {e})"),
                few_shots: Vec::new(),
            }
        }
    }
}

pub fn read_prompt(path: &Path) -> Result<PromptSnapshot, CommonError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommonError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_prompt(&content).map_err(|e| match e {
        ParseFailure::Json(source) => CommonError::Json {
            path: path.display().to_string(),
            source,
        },
        ParseFailure::NotAnObject => CommonError::Shape {
            path: path.display().to_string(),
            message: "top-level value must be an object".to_string(),
        },
    })
}

enum ParseFailure {
    Json(serde_json::Error),
    NotAnObject,
}

fn parse_prompt(content: &str) -> Result<PromptSnapshot, ParseFailure> {
    let value: Value = serde_json::from_str(content).map_err(ParseFailure::Json)?;
    let Value::Object(map) = &value else {
        return Err(ParseFailure::NotAnObject);
    };

    let has_system = map.contains_key("system");
    if !has_system {
        info!("'system' missing from prompt file, using placeholder");
    }
    if !map.get("few_shots").is_some_and(Value::is_array) {
        info!("'few_shots' missing or not a list, using empty template set");
    }

    let mut snapshot: PromptSnapshot = serde_json::from_value(value).map_err(ParseFailure::Json)?;
    if !has_system {
        snapshot.system = MISSING_KEY_SYSTEM_PROMPT.to_string();
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_valid_prompt() {
        let file = write_temp(
            r#"{
                "system": "Eres SENA-Mate",
                "few_shots": [
                    {"title": "Bug fix", "description": "login", "checklist": ["Probar login"]},
                    {"title": "Docs"}
                ]
            }"#,
        );
        let snapshot = load_prompt(file.path());
        assert_eq!(snapshot.system, "Eres SENA-Mate");
        assert_eq!(snapshot.few_shots.len(), 2);
        assert_eq!(snapshot.few_shots[0].checklist, vec!["Probar login"]);
        assert!(snapshot.few_shots[1].checklist.is_empty());
    }

    #[test]
    fn missing_file_uses_default_prompt() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let snapshot = load_prompt(&dir.path().join("prompt.json"));
        assert_eq!(snapshot.system, MISSING_FILE_SYSTEM_PROMPT);
        assert!(snapshot.few_shots.is_empty());
    }

    #[test]
    fn missing_system_and_bad_few_shots_are_defaulted() {
        let file = write_temp(r#"{"few_shots": "nope"}"#);
        let snapshot = load_prompt(file.path());
        assert_eq!(snapshot.system, MISSING_KEY_SYSTEM_PROMPT);
        assert!(snapshot.few_shots.is_empty());
    }

    #[test]
    fn invalid_json_reports_error_in_system_prompt() {
        let file = write_temp("{ not json");
        assert!(matches!(read_prompt(file.path()), Err(CommonError::Json { .. })));

        let snapshot = load_prompt(file.path());
        assert!(snapshot.system.starts_with("SENA-Mate (error leyendo prompt.json:"));
        assert!(snapshot.few_shots.is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let file = write_temp(r#"["system", "few_shots"]"#);
        assert!(matches!(read_prompt(file.path()), Err(CommonError::Shape { .. })));
    }

    #[test]
    fn unreadable_path_reports_error_in_system_prompt() {
        // Exists, but a directory cannot be read as a file.
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(matches!(read_prompt(dir.path()), Err(CommonError::Io { .. })));

        let snapshot = load_prompt(dir.path());
        assert!(snapshot.system.starts_with("SENA-Mate (error leyendo prompt.json: failed to read"));
        assert!(snapshot.few_shots.is_empty());
    }
}
