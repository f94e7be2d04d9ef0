//! Naming resolver: every output name and path derived from one module.

use crate::artifact::ArtifactKind;
use crate::case::to_type_name;
use benchgen_common::SpecStyle;
use std::path::{Path, PathBuf};

/// Extension of the Verilog harness.
pub const VERILOG_EXT: &str = "v";
/// Extension of every host-language artifact.
pub const RUBY_EXT: &str = "rb";
/// Extension of the runner script.
pub const RUNNER_EXT: &str = "rake";

/// Derived names and file paths for one module, test identifier and style.
///
/// Every field is a pure function of the inputs to [`OutputDescriptor::resolve`]
/// (and [`OutputDescriptor::with_runtime_root`]). Base names follow
/// `<module>_<test>_<kind>`; file paths are the base name plus the kind's
/// extension, relative to the output directory.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutputDescriptor {
    style: SpecStyle,
    test_name: String,
    runtime_root: String,

    verilog_bench_name: String,
    verilog_bench_path: PathBuf,
    ruby_bench_name: String,
    ruby_bench_path: PathBuf,
    design_name: String,
    design_path: PathBuf,
    design_class_name: String,
    proto_name: String,
    proto_path: PathBuf,
    spec_name: String,
    spec_path: PathBuf,
    spec_class_name: String,
    runner_name: String,
    runner_path: PathBuf,
}

fn file_name(base: &str, ext: &str) -> PathBuf {
    PathBuf::from(format!("{base}.{ext}"))
}

impl OutputDescriptor {
    /// Derives every output name for `module_name`.
    ///
    /// Total: the style is already a member of the closed set, so no input
    /// can fail here. The runner references no runtime location until one
    /// is set with [`with_runtime_root`](Self::with_runtime_root).
    pub fn resolve(module_name: &str, test_name: &str, style: SpecStyle) -> Self {
        let base = |suffix: &str| format!("{module_name}_{test_name}_{suffix}");

        let bench = base("bench");
        let design = base("design");
        let proto = base("proto");
        let spec = base("spec");
        let runner = base("runner");

        Self {
            style,
            test_name: test_name.to_string(),
            runtime_root: String::new(),

            verilog_bench_path: file_name(&bench, VERILOG_EXT),
            verilog_bench_name: bench.clone(),
            ruby_bench_path: file_name(&bench, RUBY_EXT),
            ruby_bench_name: bench,
            design_path: file_name(&design, RUBY_EXT),
            design_class_name: to_type_name(&design),
            design_name: design,
            proto_path: file_name(&proto, RUBY_EXT),
            proto_name: proto,
            spec_path: file_name(&spec, RUBY_EXT),
            spec_class_name: to_type_name(&spec),
            spec_name: spec,
            runner_path: file_name(&runner, RUNNER_EXT),
            runner_name: runner,
        }
    }

    /// Sets the location of the shared runner template.
    pub fn with_runtime_root(mut self, root: impl Into<String>) -> Self {
        self.runtime_root = root.into();
        self
    }

    /// The specification style.
    pub fn style(&self) -> SpecStyle {
        self.style
    }

    /// The test identifier embedded in every name.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// The runner template location; empty when unset.
    pub fn runtime_root(&self) -> &str {
        &self.runtime_root
    }

    /// Name of the Verilog harness module, also the instance path prefix the
    /// design uses to look up ports.
    pub fn verilog_bench_name(&self) -> &str {
        &self.verilog_bench_name
    }

    /// Verilog harness file.
    pub fn verilog_bench_path(&self) -> &Path {
        &self.verilog_bench_path
    }

    /// Base name of the host-language harness.
    pub fn ruby_bench_name(&self) -> &str {
        &self.ruby_bench_name
    }

    /// Host-language harness file.
    pub fn ruby_bench_path(&self) -> &Path {
        &self.ruby_bench_path
    }

    /// Base name of the interface adapter.
    pub fn design_name(&self) -> &str {
        &self.design_name
    }

    /// Interface adapter file.
    pub fn design_path(&self) -> &Path {
        &self.design_path
    }

    /// Type name of the interface adapter.
    pub fn design_class_name(&self) -> &str {
        &self.design_class_name
    }

    /// Base name of the prototype.
    pub fn proto_name(&self) -> &str {
        &self.proto_name
    }

    /// Prototype file.
    pub fn proto_path(&self) -> &Path {
        &self.proto_path
    }

    /// Base name of the specification.
    pub fn spec_name(&self) -> &str {
        &self.spec_name
    }

    /// Specification file.
    pub fn spec_path(&self) -> &Path {
        &self.spec_path
    }

    /// Type name of the specification.
    pub fn spec_class_name(&self) -> &str {
        &self.spec_class_name
    }

    /// Base name of the runner.
    pub fn runner_name(&self) -> &str {
        &self.runner_name
    }

    /// Runner file.
    pub fn runner_path(&self) -> &Path {
        &self.runner_path
    }

    /// Name of the module-under-test instance inside the Verilog harness.
    pub fn instance_name(&self) -> String {
        format!("{}_design", self.verilog_bench_name)
    }

    /// File path for one artifact kind.
    pub fn path(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Runner => self.runner_path(),
            ArtifactKind::VerilogBench => self.verilog_bench_path(),
            ArtifactKind::RubyBench => self.ruby_bench_path(),
            ArtifactKind::Design => self.design_path(),
            ArtifactKind::Proto => self.proto_path(),
            ArtifactKind::Spec => self.spec_path(),
        }
    }

    /// Every file path, in write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        ArtifactKind::ALL.into_iter().map(move |kind| self.path(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counter_names() {
        let o = OutputDescriptor::resolve("counter", "test", SpecStyle::Generic);
        assert_eq!(o.design_class_name(), "CounterTestDesign");
        assert_eq!(o.spec_class_name(), "CounterTestSpec");
        assert_eq!(o.spec_path(), Path::new("counter_test_spec.rb"));
        assert_eq!(o.verilog_bench_path(), Path::new("counter_test_bench.v"));
        assert_eq!(o.ruby_bench_path(), Path::new("counter_test_bench.rb"));
        assert_eq!(o.design_path(), Path::new("counter_test_design.rb"));
        assert_eq!(o.proto_path(), Path::new("counter_test_proto.rb"));
        assert_eq!(o.runner_path(), Path::new("counter_test_runner.rake"));
        assert_eq!(o.verilog_bench_name(), "counter_test_bench");
        assert_eq!(o.instance_name(), "counter_test_bench_design");
    }

    #[test]
    fn resolve_is_pure() {
        for style in SpecStyle::ALL {
            let a = OutputDescriptor::resolve("alu", "smoke", style).with_runtime_root("/opt/rv");
            let b = OutputDescriptor::resolve("alu", "smoke", style).with_runtime_root("/opt/rv");
            assert_eq!(a, b);
            assert_eq!(a.style(), style);
        }
    }

    #[test]
    fn paths_never_collide() {
        let o = OutputDescriptor::resolve("fifo", "t", SpecStyle::XUnit);
        let paths: HashSet<_> = o.paths().collect();
        assert_eq!(paths.len(), ArtifactKind::ALL.len());
    }

    #[test]
    fn distinct_tests_are_disjoint() {
        let tests = ["test", "smoke", "a_bench", "x_spec_design"];
        let mut seen = HashSet::new();
        for test in tests {
            let o = OutputDescriptor::resolve("m", test, SpecStyle::Generic);
            for path in o.paths() {
                assert!(seen.insert(path.to_path_buf()), "{} reused", path.display());
            }
        }
    }

    #[test]
    fn style_does_not_change_names() {
        let g = OutputDescriptor::resolve("m", "t", SpecStyle::Generic);
        let r = OutputDescriptor::resolve("m", "t", SpecStyle::RSpec);
        assert!(g.paths().eq(r.paths()));
    }

    #[test]
    fn runtime_root_defaults_empty() {
        let o = OutputDescriptor::resolve("m", "t", SpecStyle::Generic);
        assert_eq!(o.runtime_root(), "");
        assert_eq!(o.with_runtime_root("rv").runtime_root(), "rv");
    }
}
