//! # Interactive Shell
//!
//! Line-based command interpreter over one [`Session`].
//!
//! [`Shell::execute`] turns one input line into the text to print, so the
//! interpreter can be driven without a terminal. [`Shell::run`] wires it to
//! any reader and writer.
//!
//! Verbs are case-insensitive. Arguments keep their case after trimming.

use crate::export::{self, ExportFormat};
use crate::i18n::{Language, Msg};
use serverconf_core::{
    Catalog, CompatibilityInfo, Component, ComponentType, Configuration, ConfiguratorError,
    Session,
};
use std::fmt::Write as _;
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 60;

/// Prompt shown before each line.
pub const PROMPT: &str = "configurator> ";

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

impl Outcome {
    /// Text to print.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Outcome::Continue(text) | Outcome::Quit(text) => text,
        }
    }

    /// Whether the shell should stop.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit(_))
    }
}

// =============================================================================
// SHELL
// =============================================================================

/// Interactive configurator shell.
pub struct Shell {
    session: Session,
    lang: Language,
}

impl Shell {
    #[must_use]
    pub fn new(session: Session, lang: Language) -> Self {
        Self { session, lang }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.lang
    }

    /// Greeting printed when the shell starts.
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "🖥️  {}\n{}\n{}",
            self.lang.text(Msg::Welcome).to_uppercase(),
            self.lang.text(Msg::HelpHint),
            separator()
        )
    }

    /// Interpret one input line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (verb, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        let verb = verb.to_lowercase();

        tracing::debug!(verb = %verb, arg = %arg, "shell command");

        let text = match (verb.as_str(), arg) {
            ("", _) => String::new(),
            ("quit" | "exit", _) => return Outcome::Quit(self.lang.text(Msg::Goodbye).to_string()),
            ("help", _) => self.lang.text(Msg::Help).to_string(),
            ("list", "") => render_catalog(self.session.inventory().catalog(), self.lang),
            ("list", type_name) => self.list_available(type_name),
            ("config", _) => render_configuration(
                &self.session.snapshot(),
                self.lang,
                self.session.inventory().catalog(),
            ),
            ("clear", _) => {
                self.session.clear();
                self.lang.text(Msg::ConfigCleared).to_string()
            }
            ("export", format) => self.export(format),
            ("add" | "remove" | "search" | "compat" | "info" | "lang", "") => {
                format!("{}: {} <…>", self.lang.text(Msg::Usage), verb)
            }
            ("add", id) => self.add(id),
            ("remove", id) => self.remove(id),
            ("search", query) => render_search(&self.session, query, None, self.lang),
            ("compat", id) => render_compatibility(&self.session, id, self.lang),
            ("info", id) => match self.session.component(id) {
                Some(component) => render_component(component, self.lang),
                None => not_found(id, self.lang),
            },
            ("lang", code) => match code.parse::<Language>() {
                Ok(lang) => {
                    self.lang = lang;
                    lang.text(Msg::LanguageSet).to_string()
                }
                Err(e) => self.error(&e),
            },
            _ => self.lang.text(Msg::UnknownCommand).to_string(),
        };

        Outcome::Continue(text)
    }

    /// Read lines from `input` until `quit`, `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ConfiguratorError> {
        let io = |e: std::io::Error| ConfiguratorError::IoError(e.to_string());

        writeln!(output, "{}", self.banner()).map_err(io)?;
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}").map_err(io)?;
            output.flush().map_err(io)?;

            line.clear();
            if input.read_line(&mut line).map_err(io)? == 0 {
                writeln!(output, "\n{}", self.lang.text(Msg::Goodbye)).map_err(io)?;
                return Ok(());
            }

            let outcome = self.execute(&line);
            if !outcome.text().is_empty() {
                writeln!(output, "{}", outcome.text()).map_err(io)?;
            }
            if outcome.is_quit() {
                return Ok(());
            }
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    fn add(&mut self, id: &str) -> String {
        let outcome = self.session.add(id);
        if outcome.accepted {
            let name = self
                .session
                .component(id)
                .map_or(id, |c| c.name.as_str());
            return format!("✅ {}: {}", self.lang.text(Msg::Added), name);
        }

        let mut text = format!("❌ {}:", self.lang.text(Msg::CannotAdd));
        for reason in self
            .lang
            .violations(&outcome.violations, self.session.inventory().catalog())
        {
            let _ = write!(text, "\n  - {reason}");
        }
        text
    }

    fn remove(&mut self, id: &str) -> String {
        let name = self
            .session
            .component(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone());
        if self.session.remove(id) {
            format!("✅ {}: {}", self.lang.text(Msg::Removed), name)
        } else {
            format!("❌ {}: {}", self.lang.text(Msg::NotInConfiguration), id)
        }
    }

    fn list_available(&self, type_name: &str) -> String {
        match type_name.parse::<ComponentType>() {
            Ok(component_type) => render_available(
                &self.session.available_components(component_type),
                component_type,
                self.lang,
            ),
            Err(e) => self.error(&e),
        }
    }

    fn export(&self, format: &str) -> String {
        let config = self.session.snapshot();
        let catalog = self.session.inventory().catalog();

        let formats = if format.is_empty() {
            vec![ExportFormat::Json, ExportFormat::Csv]
        } else {
            match format.parse::<ExportFormat>() {
                Ok(format) => vec![format],
                Err(e) => return self.error(&e),
            }
        };

        let mut sections = Vec::new();
        for format in formats {
            let title = match format {
                ExportFormat::Json => Msg::JsonExport,
                ExportFormat::Csv => Msg::CsvExport,
            };
            match export::render(&config, format, self.lang, catalog) {
                Ok(body) => sections.push(format!("{}:\n{}", self.lang.text(title), body.trim_end())),
                Err(e) => return self.error(&e),
            }
        }
        sections.join(format!("\n\n{}\n\n", "=".repeat(40)).as_str())
    }

    fn error(&self, err: &ConfiguratorError) -> String {
        format!("❌ {}: {}", self.lang.text(Msg::Error), err)
    }
}

// =============================================================================
// RENDERING
// =============================================================================

pub(crate) fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// `$1500.00`
pub(crate) fn money(component: &Component) -> String {
    format!("${}", component.effective_price())
}

fn not_found(id: &str, lang: Language) -> String {
    format!("❌ {}: {}", lang.text(Msg::ComponentNotFound), id)
}

/// Every catalog component, grouped by type.
pub fn render_catalog(catalog: &Catalog, lang: Language) -> String {
    let mut text = format!("{}\n{}:\n", separator(), lang.text(Msg::CatalogListing).to_uppercase());
    for component_type in catalog.types() {
        let _ = write!(text, "\n{}:\n", lang.type_label(component_type).to_uppercase());
        for component in catalog.list_by_type(component_type) {
            let _ = writeln!(
                text,
                "  {}: {} ({})",
                component.id,
                component.name,
                money(component)
            );
        }
    }
    text.push_str(&separator());
    text
}

/// Components of one type that can be added now.
pub fn render_available(
    components: &[&Component],
    component_type: ComponentType,
    lang: Language,
) -> String {
    if components.is_empty() {
        return lang.text(Msg::NothingAvailable).to_string();
    }
    let mut text = format!(
        "{} ({}):",
        lang.text(Msg::AvailableComponents),
        lang.type_label(component_type)
    );
    for component in components {
        let _ = write!(text, "\n  {}: {} ({})", component.id, component.name, money(component));
    }
    text
}

/// Search results.
pub fn render_search(
    session: &Session,
    query: &str,
    component_type: Option<ComponentType>,
    lang: Language,
) -> String {
    let results = session.search(query, component_type);
    if results.is_empty() {
        return format!("{} '{}'", lang.text(Msg::NoResults), query);
    }
    let mut text = format!("{} '{}':", lang.text(Msg::SearchResultsFor), query);
    for component in results {
        let _ = write!(
            text,
            "\n  {}: {} ({})",
            component.id,
            component.name,
            lang.type_label(component.component_type)
        );
    }
    text
}

/// Compatibility overview of one component.
pub fn render_compatibility(session: &Session, id: &str, lang: Language) -> String {
    let Some(component) = session.component(id) else {
        return not_found(id, lang);
    };
    let CompatibilityInfo {
        compatible_with,
        incompatible_with,
    } = session.compatibility_info(id);

    let join = |ids: &[serverconf_core::ComponentId]| {
        if ids.is_empty() {
            lang.text(Msg::NoneListed).to_string()
        } else {
            ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
        }
    };

    format!(
        "{} {}:\n  {}: {}\n  {}: {}",
        lang.text(Msg::CompatibilityFor),
        component.name,
        lang.text(Msg::CompatibleWith),
        join(compatible_with.as_slice()),
        lang.text(Msg::IncompatibleWith),
        join(incompatible_with.as_slice()),
    )
}

/// Full details of one component.
pub fn render_component(component: &Component, lang: Language) -> String {
    let mut text = format!(
        "  ID: {}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}",
        component.id,
        lang.text(Msg::Name),
        component.name,
        lang.text(Msg::Type),
        lang.type_label(component.component_type),
        lang.text(Msg::Manufacturer),
        component.manufacturer,
        lang.text(Msg::Model),
        component.model,
        lang.text(Msg::Price),
        money(component),
        lang.text(Msg::Availability),
        lang.text(if component.available {
            Msg::InStock
        } else {
            Msg::OutOfStock
        }),
    );
    if let Some(description) = &component.description {
        let _ = write!(text, "\n  {}: {}", lang.text(Msg::Description), description);
    }
    if !component.attributes.is_empty() {
        let _ = write!(text, "\n  {}:", lang.text(Msg::Specifications));
        for attr in &component.attributes {
            let unit = attr
                .unit
                .as_deref()
                .map(|u| format!(" {}", lang.unit_label(u)))
                .unwrap_or_default();
            let _ = write!(
                text,
                "\n    {}: {}{}",
                lang.attribute_label(&attr.name),
                attr.value,
                unit
            );
        }
    }
    text
}

/// A configuration snapshot.
pub fn render_configuration(config: &Configuration, lang: Language, catalog: &Catalog) -> String {
    let mut text = separator();
    let _ = write!(
        text,
        "\n{}\n{}: ${}\n{}: {}",
        export::configuration_name(config, lang).to_uppercase(),
        lang.text(Msg::TotalPrice),
        config.total_price,
        lang.text(Msg::Status),
        if config.is_valid {
            format!("✅ {}", lang.text(Msg::Valid))
        } else {
            format!("❌ {}", lang.text(Msg::Invalid))
        }
    );

    if !config.validation_errors.is_empty() {
        let _ = write!(text, "\n{}:", lang.text(Msg::ValidationErrors));
        for reason in lang.violations(&config.validation_errors, catalog) {
            let _ = write!(text, "\n  ❌ {reason}");
        }
    }

    let _ = write!(text, "\n{}:", lang.text(Msg::Components));
    if config.components.is_empty() {
        let _ = write!(text, "\n  {}", lang.text(Msg::NoComponents));
    }
    for (component_type, components) in &config.components {
        let _ = write!(text, "\n  {}:", lang.type_label(*component_type).to_uppercase());
        for component in components {
            let _ = write!(text, "\n    - {} ({})", component.name, money(component));
        }
    }
    let _ = write!(text, "\n{}", separator());
    text
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serverconf_core::sample;
    use std::sync::Arc;

    fn shell() -> Shell {
        let inventory = Arc::new(sample::standard().expect("standard"));
        Shell::new(Session::new(inventory), Language::En)
    }

    #[test]
    fn verbs_are_case_insensitive_ids_are_not() {
        let mut shell = shell();
        let out = shell.execute("  ADD hp_ml350g4p ");
        assert!(out.text().contains("HP ProLiant ML350 G4p"), "{}", out.text());
        assert!(shell.session().contains("hp_ml350g4p"));

        let out = shell.execute("add HP_ML350G4P");
        assert!(out.text().contains("not found"), "{}", out.text());
    }

    #[test]
    fn quit_and_exit_stop_the_shell() {
        let mut shell = shell();
        assert!(shell.execute("quit").is_quit());
        assert!(shell.execute("EXIT").is_quit());
        assert!(!shell.execute("help").is_quit());
    }

    #[test]
    fn missing_argument_prints_usage() {
        let mut shell = shell();
        assert!(shell.execute("add").text().starts_with("Usage"));
    }

    #[test]
    fn empty_line_prints_nothing() {
        let mut shell = shell();
        assert_eq!(shell.execute("   "), Outcome::Continue(String::new()));
    }
}
