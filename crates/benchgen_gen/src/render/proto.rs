//! Behavioral prototype: a stand-in for the module that invalidates its
//! outputs on every rising clock edge.

use super::INDENT;
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_parser::ModuleDescriptor;

fn body(w: &mut CodeWriter, module: &ModuleDescriptor) {
    w.line("# discard old outputs");
    for port in module.output_ports() {
        w.line(&format!("{}.x!", port.name()));
    }
    w.blank();
    w.line("# process new inputs");
    w.blank();
    w.line("# produce new outputs");
}

pub(super) fn render(module: &ModuleDescriptor, _output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);

    w.line("# Ruby prototype of the design under test's Verilog implementation.");
    w.block("def feign!", "end", |w| match module.clock_port() {
        Some(clock) => {
            w.block(&format!("if {}.posedge?", clock.name()), "end", |w| {
                body(w, module)
            });
        }
        None => body(w, module),
    });
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_util::module;
    use super::*;
    use benchgen_common::SpecStyle;

    fn proto(decl: &str) -> String {
        let m = module(decl);
        render(&m, &OutputDescriptor::resolve(m.name(), "test", SpecStyle::Generic))
    }

    #[test]
    fn outputs_reset_on_clock_edge() {
        let expected = "\
# Ruby prototype of the design under test's Verilog implementation.
def feign!
  if clk.posedge?
    # discard old outputs
    q.x!
    bus.x!

    # process new inputs

    # produce new outputs
  end
end
";
        assert_eq!(
            proto("module m(input clk, input d, output [3:0] q, inout bus);"),
            expected
        );
    }

    #[test]
    fn inputs_untouched() {
        let text = proto("module m(input clk, input d, output q);");
        assert!(!text.contains("d.x!"));
        assert!(!text.contains("clk.x!"));
    }

    #[test]
    fn portless_prototype_has_no_edge_check() {
        let text = proto("module top;");
        assert!(!text.contains("posedge"));
        assert!(text.contains("def feign!\n  # discard old outputs\n"));
    }
}
