//! Referential validation of a full theme
//!
//! [`validate`] walks every binding and palette token and reports each
//! reference that does not resolve. It never stops at the first problem:
//! editors show every broken reference at once.

use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::error::MissingRef;
use crate::resolve::{ResolveOptions, Resolver};
use crate::theme::Theme;
use crate::tokens::*;

/// Issue severity
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A reference that does not resolve
    Error,
    /// Resolvable, but malformed (a scale on a foundation reference)
    Warning,
}

/// A single validation finding
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Dotted path of the offending field, e.g. `palette.light.surface.primary.default.color`
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    fn new(path: String, missing: &MissingRef) -> Self {
        let severity = match missing {
            MissingRef::FoundationScale { .. } => Severity::Warning,
            _ => Severity::Error,
        };
        Self {
            message: format!("{}: {}", path, missing),
            path,
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// True if any issue is an error rather than a warning
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(Issue::is_error)
}

/// Report every dangling or malformed reference in `theme`
pub fn validate(theme: &Theme) -> Vec<Issue> {
    let resolver = Resolver::with_options(theme, ResolveOptions::strict());
    let mut issues = Vec::new();

    // Color roles -> collection or foundation
    for role in ColorRole::ALL {
        if let Err(missing) = resolver.color_role(role) {
            issues.push(Issue::new(format!("color.{}", role), &missing));
        }
    }

    // Font roles -> font tables, per attribute
    for attribute in FontAttribute::ALL {
        for role in FontRole::ALL {
            if let Err(missing) = resolver.font(role, attribute) {
                issues.push(Issue::new(
                    format!("font.{}.{}", attribute, role),
                    &missing,
                ));
            }
        }
    }

    // Size roles -> dimension table
    for (kind, name, key) in theme.size.iter() {
        if let Err(missing) = resolver.dimension(key) {
            issues.push(Issue::new(
                format!("size.{}.{}", kind.path(), name),
                &missing,
            ));
        }
    }

    // Palette tokens, both modes, all sections
    for mode in Mode::ALL {
        for (section, group, variant, value) in theme.palette(mode).tokens() {
            if let Err(missing) = resolver.color(value) {
                let field = if missing.concerns_scale() {
                    "scale"
                } else {
                    "color"
                };
                issues.push(Issue::new(
                    format!(
                        "palette.{}.{}.{}.{}.{}",
                        mode, section, group, variant, field
                    ),
                    &missing,
                ));
            }
        }
    }

    if issues.is_empty() {
        tracing::trace!("validate - theme is fully resolvable");
    } else {
        tracing::debug!(
            "validate - {} issues ({} errors)",
            issues.len(),
            issues.iter().filter(|issue| issue.is_error()).count()
        );
    }

    issues
}
