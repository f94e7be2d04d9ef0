//! Output naming and template rendering.
//!
//! [`OutputDescriptor::resolve`] derives every artifact name from a module
//! name, a test identifier and a [`SpecStyle`](benchgen_common::SpecStyle).
//! [`render_all`] binds a parsed [`ModuleDescriptor`](benchgen_parser::ModuleDescriptor)
//! and its descriptor into the six templates, producing one
//! [`RenderedArtifact`] per [`ArtifactKind`] in write order.

#![warn(missing_docs)]

pub mod artifact;
pub mod case;
pub mod code_writer;
pub mod output;
pub mod render;

pub use artifact::{ArtifactKind, RenderedArtifact};
pub use case::to_type_name;
pub use code_writer::CodeWriter;
pub use output::OutputDescriptor;
pub use render::{render, render_all};

#[cfg(test)]
mod tests {
    use super::*;
    use benchgen_common::SpecStyle;
    use benchgen_parser::parse_declaration;

    #[test]
    fn counter_scenario() {
        let module = parse_declaration("module counter(clk, reset, count);").unwrap();
        let output = OutputDescriptor::resolve(module.name(), "test", SpecStyle::Generic);
        assert_eq!(output.design_class_name(), "CounterTestDesign");
        assert_eq!(output.spec_path(), std::path::Path::new("counter_test_spec.rb"));

        let artifacts = render_all(&module, &output);
        let spec = artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Spec)
            .unwrap();
        assert!(spec.content.contains("@design = CounterTestDesign.new"));
    }
}
