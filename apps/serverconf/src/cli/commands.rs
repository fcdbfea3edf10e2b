//! # CLI Command Implementations

use crate::api;
use crate::export::{self, ExportFormat};
use crate::i18n::{Language, Msg};
use crate::shell::{self, Shell};
use serde::Serialize;
use serverconf_core::{
    Component, ComponentId, ComponentType, ConfiguratorError, Inventory, Selection, Session,
    ValidationEngine, Violation,
};
use std::path::{Path, PathBuf};

// =============================================================================
// HELPERS
// =============================================================================

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ConfiguratorError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ConfiguratorError::SerializationError(format!("JSON output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

fn parse_type(raw: Option<&str>) -> Result<Option<ComponentType>, ConfiguratorError> {
    raw.map(str::parse::<ComponentType>).transpose()
}

fn find<'a>(session: &'a Session, id: &str) -> Result<&'a Component, ConfiguratorError> {
    session
        .component(id)
        .ok_or_else(|| ConfiguratorError::InvalidInput(format!("Component not found: {}", id)))
}

/// Validate an output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, ConfiguratorError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        ConfiguratorError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(ConfiguratorError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| ConfiguratorError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// SHELL COMMAND
// =============================================================================

/// Run the interactive shell on stdin/stdout.
pub fn cmd_shell(session: Session, lang: Language) -> Result<(), ConfiguratorError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(session, lang).run(stdin.lock(), stdout.lock())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    session: Session,
    lang: Language,
    host: &str,
    port: u16,
) -> Result<(), ConfiguratorError> {
    println!("serverconf HTTP API starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", host);
    println!("  Port:       {}", port);
    println!("  Language:   {}", lang);
    println!("  Components: {}", session.inventory().catalog().len());
    println!();
    println!("Endpoints:");
    println!("  GET  /components[?type=]            - Catalog listing");
    println!("  GET  /search?q=&type=               - Search components");
    println!("  GET  /compat/{{id}}                   - Compatibility overview");
    println!("  GET  /configuration                 - Current configuration");
    println!("  POST /configuration/add             - Add a component");
    println!("  POST /configuration/remove          - Remove a component");
    println!("  POST /configuration/clear           - Start over");
    println!("  GET  /configuration/available/{{t}}   - Addable components");
    println!("  GET  /export?format=json|csv        - Export");
    println!("  GET  /health                        - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, session, lang).await
}

// =============================================================================
// CATALOG COMMANDS
// =============================================================================

/// List catalog components, optionally of one type.
pub fn cmd_list(
    session: &Session,
    lang: Language,
    json_mode: bool,
    component_type: Option<&str>,
) -> Result<(), ConfiguratorError> {
    let catalog = session.inventory().catalog();
    let component_type = parse_type(component_type)?;

    if json_mode {
        let components: Vec<&Component> = match component_type {
            Some(t) => catalog.list_by_type(t),
            None => catalog.iter().collect(),
        };
        return print_json(&components);
    }

    match component_type {
        Some(t) => println!(
            "{}",
            shell::render_available(&catalog.list_by_type(t), t, lang)
        ),
        None => println!("{}", shell::render_catalog(catalog, lang)),
    }
    Ok(())
}

/// Search components by name or manufacturer.
pub fn cmd_search(
    session: &Session,
    lang: Language,
    json_mode: bool,
    query: &str,
    component_type: Option<&str>,
) -> Result<(), ConfiguratorError> {
    let component_type = parse_type(component_type)?;

    if json_mode {
        return print_json(&session.search(query, component_type));
    }
    println!(
        "{}",
        shell::render_search(session, query, component_type, lang)
    );
    Ok(())
}

/// Show the compatibility entry of a component.
pub fn cmd_compat(
    session: &Session,
    lang: Language,
    json_mode: bool,
    id: &str,
) -> Result<(), ConfiguratorError> {
    let component = find(session, id)?;

    if json_mode {
        let info = session.compatibility_info(id);
        return print_json(&serde_json::json!({
            "id": component.id,
            "compatible_with": info.compatible_with,
            "incompatible_with": info.incompatible_with,
        }));
    }
    println!("{}", shell::render_compatibility(session, id, lang));
    Ok(())
}

/// Show component details.
pub fn cmd_info(
    session: &Session,
    lang: Language,
    json_mode: bool,
    id: &str,
) -> Result<(), ConfiguratorError> {
    let component = find(session, id)?;

    if json_mode {
        return print_json(component);
    }
    println!("{}", shell::render_component(component, lang));
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Verdict on an arbitrary set of component ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub ids: Vec<String>,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Validate `ids` as one configuration.
///
/// Unknown and repeated ids are reported, then every ordered pair is checked
/// against the compatibility table, then the rule set runs over the whole
/// selection.
pub fn check_ids(inventory: &Inventory, ids: &[String]) -> CheckReport {
    let catalog = inventory.catalog();
    let mut selection = Selection::new();
    let mut violations = Vec::new();

    for id in ids {
        let id = id.trim();
        match catalog.get(id) {
            None => violations.push(Violation::NotFound {
                id: ComponentId::new(id),
            }),
            Some(component) => {
                if !selection.insert(component.component_type, component.id.clone()) {
                    violations.push(Violation::AlreadySelected {
                        id: component.id.clone(),
                    });
                }
            }
        }
    }

    let engine = ValidationEngine::new(inventory);
    violations.extend(engine.pairwise_violations(&selection));
    violations.extend(engine.validate_configuration(&selection));

    CheckReport {
        ids: ids.iter().map(|id| id.trim().to_string()).collect(),
        valid: violations.is_empty(),
        violations,
    }
}

/// Validate a set of ids and print the verdict.
///
/// An invalid configuration is an error so the exit status reflects it.
pub fn cmd_check(
    session: &Session,
    lang: Language,
    json_mode: bool,
    ids: &[String],
) -> Result<(), ConfiguratorError> {
    let report = check_ids(session.inventory(), ids);

    if json_mode {
        print_json(&report)?;
    } else if report.valid {
        println!("✅ {}", lang.text(Msg::Valid));
    } else {
        println!("❌ {}", lang.text(Msg::Invalid));
        println!("{}:", lang.text(Msg::ValidationErrors));
        for reason in lang.violations(&report.violations, session.inventory().catalog()) {
            println!("  - {}", reason);
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(ConfiguratorError::InvalidInput(format!(
            "{} violation(s) found",
            report.violations.len()
        )))
    }
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Add `ids` to `session` in order, stopping at the first rejection.
pub fn build_configuration(
    session: &mut Session,
    lang: Language,
    ids: &[String],
) -> Result<(), ConfiguratorError> {
    for id in ids {
        let id = id.trim();
        let outcome = session.add(id);
        if !outcome.accepted {
            let reasons = lang.violations(&outcome.violations, session.inventory().catalog());
            return Err(ConfiguratorError::InvalidInput(format!(
                "{} '{}': {}",
                lang.text(Msg::CannotAdd),
                id,
                reasons.join("; ")
            )));
        }
        tracing::debug!(id, "component added");
    }
    Ok(())
}

/// Build a configuration from `ids` and export it.
pub fn cmd_export(
    mut session: Session,
    lang: Language,
    ids: &[String],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), ConfiguratorError> {
    build_configuration(&mut session, lang, ids)?;
    let config = session.snapshot();
    let text = export::render(&config, format, lang, session.inventory().catalog())?;

    match output {
        Some(path) => {
            let validated = validate_output_path(path)?;
            std::fs::write(&validated, text)
                .map_err(|e| ConfiguratorError::IoError(format!("Write file: {}", e)))?;
            tracing::info!(
                components = config.component_count(),
                "Exported configuration to {}",
                validated.display()
            );
        }
        None => println!("{}", text.trim_end()),
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serverconf_core::{ViolationKind, sample};

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn check_accepts_a_consistent_set() {
        let inventory = sample::standard().expect("standard");
        let report = check_ids(
            &inventory,
            &ids(&["hp_ml350g4p", "intel_xeon_3_0_604", "kingston_1gb_ddr2_400"]),
        );
        assert!(report.valid, "{:?}", report.violations);
    }

    #[test]
    fn check_reports_pairs_the_session_would_never_build() {
        let inventory = sample::standard().expect("standard");
        let report = check_ids(&inventory, &ids(&["hp_ml350g4p", "intel_xeon_e5620"]));
        assert!(!report.valid);
        assert_eq!(report.violations[0].kind(), ViolationKind::IncompatiblePair);
        assert!(report.violations.contains(&Violation::IncompatiblePair {
            subject: ComponentId::new("hp_ml350g4p"),
            other: ComponentId::new("intel_xeon_e5620"),
        }));
        assert!(
            report
                .violations
                .iter()
                .any(|v| v.kind() == ViolationKind::RuleViolation)
        );
    }

    #[test]
    fn check_reports_unknown_and_repeated_ids() {
        let inventory = sample::standard().expect("standard");
        let report = check_ids(&inventory, &ids(&["ghost", "hp_ml350g4p", " hp_ml350g4p "]));
        let kinds: Vec<ViolationKind> = report.violations.iter().map(Violation::kind).collect();
        assert_eq!(
            kinds,
            vec![ViolationKind::NotFound, ViolationKind::AlreadySelected]
        );
    }

    #[test]
    fn build_configuration_stops_at_first_rejection() {
        let inventory = std::sync::Arc::new(sample::standard().expect("standard"));
        let mut session = Session::new(inventory);
        let err = build_configuration(
            &mut session,
            Language::En,
            &ids(&["hp_ml350g4p", "intel_xeon_e5620", "intel_xeon_3_0_604"]),
        )
        .expect_err("second id is incompatible");

        assert!(matches!(err, ConfiguratorError::InvalidInput(_)));
        assert_eq!(session.selected_count(), 1);
    }

    #[test]
    fn output_path_requires_existing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(validate_output_path(&dir.path().join("out.json")).is_ok());
        assert!(validate_output_path(&dir.path().join("missing").join("out.json")).is_err());
    }
}
