//! Declaration parser: turns one scanned declaration into a [`ModuleDescriptor`].
//!
//! The recognizer is a lenient header pattern, not a grammar. It understands
//! flat comma-separated parameter and port lists only; a comma inside a
//! parameter default splits the entry.

use crate::ast::{normalize_whitespace, ModuleDescriptor, ParameterDeclaration, PortDeclaration};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^module\s+([A-Za-z_][A-Za-z0-9_$]*)\s*(?:#\s*\((.*?)\))?\s*(?:\((.*?)\))?\s*;$",
    )
    .unwrap()
});

static NAMED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^module\s+([A-Za-z_][A-Za-z0-9_$]*)").unwrap());

static PARAMETER_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bparameter\b").unwrap());

/// Storage-class keywords that carry no direction.
static STORAGE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\breg\b").unwrap());

/// Why a declaration was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// No identifier follows the `module` keyword.
    #[error("module declaration has no name")]
    MissingName,
    /// The declaration never reaches a `;`.
    #[error("module declaration is not terminated by ';'")]
    Unterminated,
    /// The parameter or port list could not be delimited.
    #[error("cannot delimit the parameter and port lists of module `{0}`")]
    Malformed(String),
}

/// Parses one declaration substring as produced by the scanner.
///
/// Empty parameter and port lists are not failures; the descriptor simply has
/// no entries.
pub fn parse_declaration(text: &str) -> Result<ModuleDescriptor, DeclarationError> {
    let text = normalize_whitespace(text);
    let named = NAMED_HEADER
        .captures(&text)
        .ok_or(DeclarationError::MissingName)?;
    if !text.ends_with(';') {
        return Err(DeclarationError::Unterminated);
    }
    let caps = HEADER
        .captures(&text)
        .ok_or_else(|| DeclarationError::Malformed(named[1].to_string()))?;

    let name = caps[1].to_string();
    let parameters = caps
        .get(2)
        .map(|m| parse_parameters(m.as_str()))
        .unwrap_or_default();
    let ports = caps
        .get(3)
        .map(|m| parse_ports(m.as_str()))
        .unwrap_or_default();
    Ok(ModuleDescriptor::new(name, parameters, ports))
}

fn parse_parameters(list: &str) -> Vec<ParameterDeclaration> {
    let list = PARAMETER_KEYWORD.replace_all(list, "");
    list.split(',')
        .filter_map(ParameterDeclaration::from_raw)
        .collect()
}

fn parse_ports(list: &str) -> Vec<PortDeclaration> {
    let list = STORAGE_KEYWORD.replace_all(list, "");
    list.split(',').filter_map(PortDeclaration::from_raw).collect()
}
