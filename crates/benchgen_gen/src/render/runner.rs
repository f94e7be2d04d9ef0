//! Build/run script binding the harness to the shared runner template.

use super::INDENT;
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_parser::ModuleDescriptor;

/// Simulators the shared runner template knows how to drive, as
/// `(id, display name)`.
pub const SIMULATORS: [(&str, &str); 4] = [
    ("cver", "GPL Cver"),
    ("ivl", "Icarus Verilog"),
    ("vcs", "Synopsys VCS"),
    ("vsim", "Mentor Modelsim"),
];

const TEMPLATE_FILE: &str = "runner.rake";

pub(super) fn render(_module: &ModuleDescriptor, output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);
    let root = output.runtime_root();
    let template = if root.is_empty() {
        TEMPLATE_FILE.to_string()
    } else {
        format!("{}/{TEMPLATE_FILE}", root.trim_end_matches('/'))
    };

    w.line(&format!(
        "# Runs the `{}` test with the chosen simulator.",
        output.test_name()
    ));
    w.blank();
    w.line("# Verilog sources of the bench and the design under test");
    w.line(&format!(
        "SIMULATOR_SOURCES = FileList['{}']",
        output.verilog_bench_path().display()
    ));
    w.blank();
    w.line("# top-level module of the simulation");
    w.line(&format!("SIMULATOR_TARGET = '{}'", output.verilog_bench_name()));
    w.blank();
    w.line("# include directories searched for Verilog sources");
    w.line("SIMULATOR_INCLUDES = []");
    w.blank();
    w.line("# extra command-line arguments for each simulator");
    w.block("SIMULATOR_ARGS = {", "}", |w| {
        for (id, name) in SIMULATORS {
            w.line(&format!(":{id} => '', # {name}"));
        }
    });
    w.blank();
    w.line(&format!("load '{template}'"));
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_util::module;
    use super::*;
    use benchgen_common::SpecStyle;

    #[test]
    fn counter_runner() {
        let m = module("module counter(clk, reset, count);");
        let o = OutputDescriptor::resolve("counter", "test", SpecStyle::Generic)
            .with_runtime_root("/opt/ruby-vpi/");
        let expected = "\
# Runs the `test` test with the chosen simulator.

# Verilog sources of the bench and the design under test
SIMULATOR_SOURCES = FileList['counter_test_bench.v']

# top-level module of the simulation
SIMULATOR_TARGET = 'counter_test_bench'

# include directories searched for Verilog sources
SIMULATOR_INCLUDES = []

# extra command-line arguments for each simulator
SIMULATOR_ARGS = {
  :cver => '', # GPL Cver
  :ivl => '', # Icarus Verilog
  :vcs => '', # Synopsys VCS
  :vsim => '', # Mentor Modelsim
}

load '/opt/ruby-vpi/runner.rake'
";
        assert_eq!(render(&m, &o), expected);
    }

    #[test]
    fn relative_template_without_root() {
        let m = module("module m(clk);");
        let o = OutputDescriptor::resolve("m", "t", SpecStyle::Generic);
        assert!(render(&m, &o).ends_with("load 'runner.rake'\n"));
    }
}
