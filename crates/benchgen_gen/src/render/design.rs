//! Interface adapter exposing one handle per port.

use super::INDENT;
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_parser::ModuleDescriptor;

pub(super) fn render(module: &ModuleDescriptor, output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);
    let ports = module.ports();

    w.line("# An interface to the design under test.");
    w.block(&format!("class {}", output.design_class_name()), "end", |w| {
        if !ports.is_empty() {
            let readers = ports
                .iter()
                .map(|p| format!(":{}", p.name()))
                .collect::<Vec<_>>()
                .join(", ");
            w.line(&format!("attr_reader {readers}"));
            w.blank();
        }
        w.block("def initialize", "end", |w| {
            for port in ports {
                w.line(&format!(
                    "@{name} = Vpi::vpi_handle_by_name(\"{bench}.{name}\", nil)",
                    name = port.name(),
                    bench = output.verilog_bench_name(),
                ));
            }
        });
    });
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_util::module;
    use super::*;
    use benchgen_common::SpecStyle;

    #[test]
    fn counter_design() {
        let m = module("module counter(clk, reset, count);");
        let o = OutputDescriptor::resolve("counter", "test", SpecStyle::Generic);
        let expected = "\
# An interface to the design under test.
class CounterTestDesign
  attr_reader :clk, :reset, :count

  def initialize
    @clk = Vpi::vpi_handle_by_name(\"counter_test_bench.clk\", nil)
    @reset = Vpi::vpi_handle_by_name(\"counter_test_bench.reset\", nil)
    @count = Vpi::vpi_handle_by_name(\"counter_test_bench.count\", nil)
  end
end
";
        assert_eq!(render(&m, &o), expected);
    }

    #[test]
    fn handles_follow_test_name() {
        let m = module("module alu(input clk, output [7:0] y);");
        let o = OutputDescriptor::resolve("alu", "smoke", SpecStyle::XUnit);
        let text = render(&m, &o);
        assert!(text.contains("class AluSmokeDesign"));
        assert!(text.contains("@y = Vpi::vpi_handle_by_name(\"alu_smoke_bench.y\", nil)"));
    }

    #[test]
    fn portless_design() {
        let m = module("module top;");
        let o = OutputDescriptor::resolve("top", "test", SpecStyle::Generic);
        let text = render(&m, &o);
        assert!(!text.contains("attr_reader"));
        assert!(text.contains("  def initialize\n  end\n"));
    }
}
