use std::collections::BTreeMap;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use super::{AppError, FactRecord};

/// Template used when none is given on the command line.
pub const DEFAULT_TEMPLATE: &str = "{{.KubeNamespace}}@{{.KubeContext}}";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn new_environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
}

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(new_environment)
}

/// A validated output template.
///
/// Compilation checks syntax and that every referenced variable is one of
/// [`FactRecord::FIELD_NAMES`], so a bad template fails before any probe runs.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: String,
}

impl PromptTemplate {
    pub fn compile(source: &str) -> Result<Self, AppError> {
        let source = normalize_field_references(source);

        let mut unknown: Vec<String> = {
            let env = new_environment();
            let template = env.template_from_str(&source)?;
            template
                .undeclared_variables(false)
                .into_iter()
                .filter(|name| !FactRecord::FIELD_NAMES.contains(&name.as_str()))
                .collect()
        };
        unknown.sort();

        if let Some(name) = unknown.into_iter().next() {
            return Err(AppError::UnknownTemplateField {
                name,
                expected: FactRecord::FIELD_NAMES.join(", "),
            });
        }

        Ok(Self { source })
    }

    /// Template source after dotted references were rewritten.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, facts: &FactRecord) -> Result<String, AppError> {
        let context: BTreeMap<&str, &str> = facts.fields().into_iter().collect();
        Ok(environment().render_str(&self.source, context)?)
    }
}

/// Rewrite Go-style `{{.Field}}` references into plain `{{Field}}`.
///
/// Only a dot directly opening an expression tag is dropped (after optional
/// whitespace-control markers and spaces). Everything else is left alone.
fn normalize_field_references(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let (head, tail) = rest.split_at(start + 2);
        out.push_str(head);

        let lead = tail
            .find(|c: char| !(c == '-' || c == '+' || c.is_whitespace()))
            .unwrap_or(tail.len());
        let (markers, expr) = tail.split_at(lead);
        out.push_str(markers);

        rest = match expr.strip_prefix('.') {
            Some(field) if field.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') => {
                field
            }
            _ => expr,
        };
    }

    out.push_str(rest);
    out
}
