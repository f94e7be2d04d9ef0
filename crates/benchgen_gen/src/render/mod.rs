//! Template renderers, one per [`ArtifactKind`].
//!
//! Each renderer only substitutes values already present on the
//! [`ModuleDescriptor`] and [`OutputDescriptor`] into a fixed skeleton.
//! Style-dependent fragments are selected by an exhaustive match on
//! [`SpecStyle`](benchgen_common::SpecStyle) inside the renderer that needs
//! them.

mod bench_rb;
mod bench_v;
mod design;
mod proto;
mod runner;
mod spec;

use crate::artifact::{ArtifactKind, RenderedArtifact};
use crate::output::OutputDescriptor;
use benchgen_parser::ModuleDescriptor;

pub use runner::SIMULATORS;

/// Indentation unit of every generated file.
const INDENT: &str = "  ";

/// Renders one artifact.
pub fn render(
    kind: ArtifactKind,
    module: &ModuleDescriptor,
    output: &OutputDescriptor,
) -> RenderedArtifact {
    let content = match kind {
        ArtifactKind::Runner => runner::render(module, output),
        ArtifactKind::VerilogBench => bench_v::render(module, output),
        ArtifactKind::RubyBench => bench_rb::render(module, output),
        ArtifactKind::Design => design::render(module, output),
        ArtifactKind::Proto => proto::render(module, output),
        ArtifactKind::Spec => spec::render(module, output),
    };
    log::trace!(
        "rendered {kind} for `{}` ({} bytes)",
        module.name(),
        content.len()
    );
    RenderedArtifact {
        kind,
        path: output.path(kind).to_path_buf(),
        content,
    }
}

/// Renders all six artifacts in write order.
pub fn render_all(module: &ModuleDescriptor, output: &OutputDescriptor) -> Vec<RenderedArtifact> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| render(kind, module, output))
        .collect()
}

/// Quoted Ruby `require` target for a generated file.
fn ruby_require(path: &std::path::Path) -> String {
    format!("require '{}'", path.display())
}

#[cfg(test)]
pub(crate) mod test_util {
    use benchgen_parser::{parse_declaration, ModuleDescriptor};

    pub fn module(decl: &str) -> ModuleDescriptor {
        parse_declaration(decl).unwrap()
    }
}
