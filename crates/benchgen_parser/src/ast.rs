//! Descriptors produced by the declaration parser.
//!
//! Descriptors are frozen once built: fields are private and only exposed
//! through shared references, so templates cannot alter what they render.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_$]*").unwrap());

/// Direction and net-type keywords dropped when a port is redeclared inside
/// the harness.
static PORT_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:input|output|inout|wire|logic|tri)\b").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses whitespace runs to single spaces and trims the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Signal direction, recognized from the keyword present in a port's text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PortDirection {
    /// `input`: driven by the harness.
    Input,
    /// `output`: observed by the harness.
    Output,
    /// `inout`: observed by the harness.
    Inout,
}

impl PortDirection {
    /// Finds the direction keyword among the tokens of `raw`.
    fn detect(raw: &str) -> Option<Self> {
        IDENT.find_iter(raw).find_map(|m| match m.as_str() {
            "input" => Some(PortDirection::Input),
            "output" => Some(PortDirection::Output),
            "inout" => Some(PortDirection::Inout),
            _ => None,
        })
    }

    /// Storage class the harness declares the port with: inputs become
    /// registers the harness drives, everything else wires it watches.
    pub fn harness_keyword(self) -> &'static str {
        match self {
            PortDirection::Input => "reg",
            PortDirection::Output | PortDirection::Inout => "wire",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
        })
    }
}

/// One signal of a module's interface.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PortDeclaration {
    raw: String,
    name: String,
    direction: Option<PortDirection>,
    harness_declaration: String,
}

impl PortDeclaration {
    /// Builds a port from one comma-separated entry of a port list.
    ///
    /// Returns `None` if the entry contains no identifier.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = normalize_whitespace(raw);
        let name = IDENT.find_iter(&raw).last()?.as_str().to_string();
        let direction = PortDirection::detect(&raw);
        let harness_declaration = match direction {
            Some(dir) => {
                let rest = normalize_whitespace(&PORT_KEYWORDS.replace_all(&raw, ""));
                format!("{} {};", dir.harness_keyword(), rest)
            }
            None => raw.clone(),
        };
        Some(Self {
            raw,
            name,
            direction,
            harness_declaration,
        })
    }

    /// The signal name: the last identifier of the declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration text with whitespace normalized.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The direction keyword present in the declaration, if any.
    pub fn direction(&self) -> Option<PortDirection> {
        self.direction
    }

    /// The line declaring this port inside the harness module. Ports without
    /// a direction keyword are repeated verbatim.
    pub fn harness_declaration(&self) -> &str {
        &self.harness_declaration
    }

    /// Returns `true` for `output` and `inout` ports.
    pub fn is_output(&self) -> bool {
        matches!(
            self.direction,
            Some(PortDirection::Output | PortDirection::Inout)
        )
    }
}

/// One configuration parameter of a module.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParameterDeclaration {
    raw: String,
    name: String,
}

impl ParameterDeclaration {
    /// Builds a parameter from one comma-separated entry of a parameter list
    /// with the `parameter` keyword already removed.
    ///
    /// The name is the last identifier before `=`, so typed and ranged
    /// parameters (`integer W = 8`, `[3:0] MASK = 4'hf`) resolve to `W` and
    /// `MASK`. Returns `None` if the entry contains no identifier.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = normalize_whitespace(raw);
        let head = raw.split('=').next().unwrap_or_default();
        let name = IDENT.find_iter(head).last()?.as_str().to_string();
        Some(Self { raw, name })
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration text, including any default value.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// One recognized module declaration.
///
/// The first port is taken to be the clock; ports keep their source order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleDescriptor {
    name: String,
    parameters: Vec<ParameterDeclaration>,
    ports: Vec<PortDeclaration>,
}

impl ModuleDescriptor {
    /// Creates a descriptor. Only the parser builds these.
    pub(crate) fn new(
        name: String,
        parameters: Vec<ParameterDeclaration>,
        ports: Vec<PortDeclaration>,
    ) -> Self {
        Self {
            name,
            parameters,
            ports,
        }
    }

    /// The module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterDeclaration] {
        &self.parameters
    }

    /// Ports in declaration order.
    pub fn ports(&self) -> &[PortDeclaration] {
        &self.ports
    }

    /// The clock signal: by convention the first port.
    pub fn clock_port(&self) -> Option<&PortDeclaration> {
        self.ports.first()
    }

    /// Ports declared with `output` or `inout`.
    pub fn output_ports(&self) -> impl Iterator<Item = &PortDeclaration> {
        self.ports.iter().filter(|p| p.is_output())
    }
}

/// Renders the descriptor back to declaration text that the parser
/// recognizes as the same module.
impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module {}", self.name)?;
        if !self.parameters.is_empty() {
            f.write_str(" #(")?;
            for (i, param) in self.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "parameter {}", param.raw)?;
            }
            f.write_str(")")?;
        }
        f.write_str(" (")?;
        for (i, port) in self.ports.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&port.raw)?;
        }
        f.write_str(");")
    }
}
