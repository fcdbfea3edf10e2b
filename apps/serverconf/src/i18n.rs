//! # Localization
//!
//! English and Russian text for everything the shell, CLI and API show to a
//! person: fixed messages, component type labels, attribute and unit labels,
//! and the rendering of engine violations.
//!
//! The language is an explicit value passed to every presentation call.
//! There is no global language state.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serverconf_core::{Breach, Catalog, ComponentType, ConfiguratorError, Violation};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// LANGUAGE
// =============================================================================

/// Presentation language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Short code (`en` / `ru`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Text of a fixed message.
    #[must_use]
    pub fn text(self, msg: Msg) -> &'static str {
        let (en, ru) = msg.pair();
        match self {
            Language::En => en,
            Language::Ru => ru,
        }
    }

    /// Display label of a component type.
    #[must_use]
    pub fn type_label(self, component_type: ComponentType) -> &'static str {
        let (en, ru) = match component_type {
            ComponentType::Server => ("Server", "Сервер"),
            ComponentType::Processor => ("Processor", "Процессор"),
            ComponentType::Memory => ("Memory", "Оперативная память"),
            ComponentType::Ssd => ("SSD", "SSD-накопитель"),
            ComponentType::Nvme => ("NVMe", "NVMe-накопитель"),
            ComponentType::HddSasSata => ("HDD SAS/SATA", "Жесткий диск SAS/SATA"),
            ComponentType::HddU320 => ("HDD U320", "Жесткий диск U320"),
            ComponentType::Controller => ("Controller", "Контроллер"),
            ComponentType::Network => ("Network", "Сетевой адаптер"),
            ComponentType::PowerSupply => ("Power Supply", "Блок питания"),
            ComponentType::Cooling => ("Cooling", "Система охлаждения"),
            ComponentType::Chassis => ("Chassis", "Корпус"),
        };
        self.pick(en, ru)
    }

    /// Display label of an attribute key. Unknown keys pass through.
    #[must_use]
    pub fn attribute_label<'a>(self, name: &'a str) -> &'a str {
        let (en, ru) = match name {
            "form_factor" => ("Form Factor", "Форм-фактор"),
            "max_processors" => ("Max Processors", "Макс. процессоров"),
            "max_memory_slots" => ("Memory Slots", "Слотов памяти"),
            "max_memory_gb" => ("Max Memory (GB)", "Макс. памяти (ГБ)"),
            "storage_bays" => ("Storage Bays", "Отсеков для дисков"),
            "power_supply_slots" => ("PSU Slots", "Слотов БП"),
            "socket_type" | "socket" => ("Socket", "Сокет"),
            "chipset" => ("Chipset", "Чипсет"),
            "frequency" => ("Frequency", "Частота"),
            "cores" => ("Cores", "Ядер"),
            "cache" => ("Cache", "Кэш"),
            "tdp" => ("TDP", "TDP"),
            "capacity" => ("Capacity", "Объем"),
            "type" => ("Type", "Тип"),
            "speed" => ("Speed", "Скорость"),
            "read_speed" => ("Read Speed", "Скорость чтения"),
            "voltage" => ("Voltage", "Напряжение"),
            "interface" => ("Interface", "Интерфейс"),
            "power" => ("Power", "Мощность"),
            "efficiency" => ("Efficiency", "КПД"),
            "modular" => ("Modular", "Модульный"),
            _ => return name,
        };
        self.pick(en, ru)
    }

    /// Display label of a unit. Unknown units pass through.
    #[must_use]
    pub fn unit_label<'a>(self, unit: &'a str) -> &'a str {
        let (en, ru) = match unit {
            "GHz" => ("GHz", "ГГц"),
            "MHz" => ("MHz", "МГц"),
            "GB" => ("GB", "ГБ"),
            "MB" => ("MB", "МБ"),
            "TB" => ("TB", "ТБ"),
            "MB/s" => ("MB/s", "МБ/с"),
            "W" => ("W", "Вт"),
            "V" => ("V", "В"),
            "RPM" => ("RPM", "об/мин"),
            _ => return unit,
        };
        self.pick(en, ru)
    }

    /// Render a violation, naming components by catalog name where known.
    #[must_use]
    pub fn violation(self, violation: &Violation, catalog: &Catalog) -> String {
        let name = |id: &serverconf_core::ComponentId| {
            catalog
                .get(id.as_str())
                .map_or_else(|| id.to_string(), |c| c.name.clone())
        };

        match (self, violation) {
            (Language::En, Violation::NotFound { id }) => format!("Component {id} not found"),
            (Language::Ru, Violation::NotFound { id }) => format!("Компонент {id} не найден"),

            (Language::En, Violation::AlreadySelected { id }) => {
                format!("Component {} is already in configuration", name(id))
            }
            (Language::Ru, Violation::AlreadySelected { id }) => {
                format!("Компонент {} уже добавлен в конфигурацию", name(id))
            }

            (Language::En, Violation::IncompatiblePair { subject, other }) => {
                format!("{} is not compatible with {}", name(subject), name(other))
            }
            (Language::Ru, Violation::IncompatiblePair { subject, other }) => {
                format!("{} несовместим с {}", name(subject), name(other))
            }

            (lang, Violation::RuleViolation { breach, .. }) => lang.breach(breach),
        }
    }

    fn breach(self, breach: &Breach) -> String {
        match (self, breach) {
            (Language::En, Breach::RequiredMissing { component }) => {
                format!("Required component {component} is missing")
            }
            (Language::Ru, Breach::RequiredMissing { component }) => {
                format!("Обязательный компонент {component} отсутствует")
            }
            (Language::En, Breach::Excluded { primary, secondary }) => {
                format!("Components {primary} and {secondary} are incompatible")
            }
            (Language::Ru, Breach::Excluded { primary, secondary }) => {
                format!("Компоненты {primary} и {secondary} несовместимы")
            }
            (Language::En, Breach::AboveMax { component, max, .. }) => {
                format!("Too many {component} components (max: {max})")
            }
            (Language::Ru, Breach::AboveMax { component, max, .. }) => {
                format!("Слишком много компонентов {component} (макс.: {max})")
            }
            (Language::En, Breach::BelowMin { component, min, .. }) => {
                format!("Not enough {component} components (min: {min})")
            }
            (Language::Ru, Breach::BelowMin { component, min, .. }) => {
                format!("Недостаточно компонентов {component} (мин.: {min})")
            }
        }
    }

    /// Render every violation in order.
    #[must_use]
    pub fn violations(self, violations: &[Violation], catalog: &Catalog) -> Vec<String> {
        violations
            .iter()
            .map(|v| self.violation(v, catalog))
            .collect()
    }

    fn pick(self, en: &'static str, ru: &'static str) -> &'static str {
        match self {
            Language::En => en,
            Language::Ru => ru,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            other => Err(ConfiguratorError::InvalidInput(format!(
                "unknown language: {other}"
            ))),
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    Welcome,
    HelpHint,
    Help,
    Goodbye,
    UnknownCommand,
    Usage,
    ConfigCleared,
    SearchResultsFor,
    NoResults,
    Added,
    Removed,
    NotInConfiguration,
    CannotAdd,
    ComponentNotFound,
    Configuration,
    TotalPrice,
    Status,
    Valid,
    Invalid,
    ValidationErrors,
    NoErrors,
    Components,
    NoComponents,
    AvailableComponents,
    NothingAvailable,
    CatalogListing,
    CompatibilityFor,
    CompatibleWith,
    IncompatibleWith,
    NoneListed,
    Name,
    Type,
    Manufacturer,
    Model,
    Price,
    Description,
    Specifications,
    Availability,
    InStock,
    OutOfStock,
    JsonExport,
    CsvExport,
    LanguageSet,
    Error,
}

impl Msg {
    const fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::Welcome => ("Server Configurator", "Конфигуратор серверов"),
            Msg::HelpHint => (
                "Type 'help' for available commands",
                "Введите 'help' для списка команд",
            ),
            Msg::Help => (HELP_EN, HELP_RU),
            Msg::Goodbye => ("Goodbye!", "До свидания!"),
            Msg::UnknownCommand => (
                "Unknown command. Type 'help' for available commands.",
                "Неизвестная команда. Введите 'help' для списка команд.",
            ),
            Msg::Usage => ("Usage", "Использование"),
            Msg::ConfigCleared => ("Configuration cleared", "Конфигурация очищена"),
            Msg::SearchResultsFor => ("Search results for", "Результаты поиска для"),
            Msg::NoResults => ("No results found", "Ничего не найдено"),
            Msg::Added => ("Component added", "Компонент добавлен"),
            Msg::Removed => ("Component removed", "Компонент удален"),
            Msg::NotInConfiguration => (
                "Component is not in the configuration",
                "Компонента нет в конфигурации",
            ),
            Msg::CannotAdd => ("Failed to add component", "Не удалось добавить компонент"),
            Msg::ComponentNotFound => ("Component not found", "Компонент не найден"),
            Msg::Configuration => ("Configuration", "Конфигурация"),
            Msg::TotalPrice => ("Total Price", "Общая стоимость"),
            Msg::Status => ("Status", "Статус"),
            Msg::Valid => ("Valid", "Действительна"),
            Msg::Invalid => ("Invalid", "Недействительна"),
            Msg::ValidationErrors => ("Validation Errors", "Ошибки валидации"),
            Msg::NoErrors => ("No errors", "Ошибок нет"),
            Msg::Components => ("Components", "Компоненты"),
            Msg::NoComponents => ("No components selected", "Компоненты не выбраны"),
            Msg::AvailableComponents => ("Available Components", "Доступные компоненты"),
            Msg::NothingAvailable => (
                "No compatible components of this type",
                "Нет совместимых компонентов этого типа",
            ),
            Msg::CatalogListing => ("List of all components", "Список всех компонентов"),
            Msg::CompatibilityFor => ("Compatibility for", "Совместимость для"),
            Msg::CompatibleWith => ("Compatible with", "Совместим с"),
            Msg::IncompatibleWith => ("Incompatible with", "Несовместим с"),
            Msg::NoneListed => ("None", "Нет"),
            Msg::Name => ("Name", "Название"),
            Msg::Type => ("Type", "Тип"),
            Msg::Manufacturer => ("Manufacturer", "Производитель"),
            Msg::Model => ("Model", "Модель"),
            Msg::Price => ("Price", "Цена"),
            Msg::Description => ("Description", "Описание"),
            Msg::Specifications => ("Specifications", "Характеристики"),
            Msg::Availability => ("Availability", "Наличие"),
            Msg::InStock => ("In Stock", "В наличии"),
            Msg::OutOfStock => ("Out of Stock", "Нет в наличии"),
            Msg::JsonExport => ("JSON Export", "Экспорт JSON"),
            Msg::CsvExport => ("CSV Export", "Экспорт CSV"),
            Msg::LanguageSet => ("Language set to English", "Язык переключен на русский"),
            Msg::Error => ("Error", "Ошибка"),
        }
    }
}

const HELP_EN: &str = "\
Available commands:
  help                    - Show this help
  list                    - List all components
  list <type>             - List components of a type that can be added now
  add <component_id>      - Add component to configuration
  remove <component_id>   - Remove component from configuration
  config                  - Show current configuration
  clear                   - Clear current configuration
  search <query>          - Search components
  compat <component_id>   - Show compatibility info
  info <component_id>     - Show component details
  export [json|csv]       - Export configuration
  lang <en|ru>            - Switch language
  quit/exit               - Exit program";

const HELP_RU: &str = "\
Доступные команды:
  help                    - Показать эту справку
  list                    - Список всех компонентов
  list <тип>              - Компоненты типа, которые можно добавить сейчас
  add <id_компонента>     - Добавить компонент в конфигурацию
  remove <id_компонента>  - Удалить компонент из конфигурации
  config                  - Показать текущую конфигурацию
  clear                   - Очистить конфигурацию
  search <запрос>         - Поиск компонентов
  compat <id_компонента>  - Информация о совместимости
  info <id_компонента>    - Подробности о компоненте
  export [json|csv]       - Экспорт конфигурации
  lang <en|ru>            - Сменить язык
  quit/exit               - Выход";

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serverconf_core::Component;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert(Component::new(
                "hp",
                "HP ProLiant",
                ComponentType::Server,
                "HP",
                "ML350",
            ))
            .expect("insert");
        catalog
    }

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("EN".parse::<Language>().expect("en"), Language::En);
        assert_eq!(" russian ".parse::<Language>().expect("ru"), Language::Ru);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn every_message_has_both_languages() {
        for msg in [Msg::Welcome, Msg::Help, Msg::ConfigCleared, Msg::Error] {
            assert!(!Language::En.text(msg).is_empty());
            assert!(!Language::Ru.text(msg).is_empty());
            assert_ne!(Language::En.text(msg), Language::Ru.text(msg));
        }
    }

    #[test]
    fn labels_fall_back_to_input() {
        assert_eq!(Language::Ru.attribute_label("socket_type"), "Сокет");
        assert_eq!(Language::Ru.attribute_label("rack_units"), "rack_units");
        assert_eq!(Language::Ru.unit_label("GHz"), "ГГц");
        assert_eq!(Language::En.unit_label("furlongs"), "furlongs");
    }

    #[test]
    fn violations_use_catalog_names() {
        let catalog = catalog();
        let v = Violation::IncompatiblePair {
            subject: "hp".into(),
            other: "ghost".into(),
        };
        assert_eq!(
            Language::En.violation(&v, &catalog),
            "HP ProLiant is not compatible with ghost"
        );
        assert_eq!(
            Language::Ru.violation(&v, &catalog),
            "HP ProLiant несовместим с ghost"
        );
    }

    #[test]
    fn english_rule_text_matches_neutral_display() {
        let catalog = catalog();
        let v = Violation::RuleViolation {
            rule: "max".into(),
            breach: Breach::AboveMax {
                component: "hp".into(),
                max: 1,
                count: 2,
            },
        };
        assert_eq!(Language::En.violation(&v, &catalog), v.to_string());
    }
}
