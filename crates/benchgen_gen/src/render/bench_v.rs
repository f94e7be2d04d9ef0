//! Verilog harness: declares the ports, instantiates the module, drives the
//! clock and relays control to the host harness.

use super::INDENT;
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_common::SpecStyle;
use benchgen_parser::ModuleDescriptor;

/// Half period of the generated clock, in simulator time units.
const HALF_PERIOD: u32 = 5;

/// Extra arguments handed to the host harness at startup.
fn init_args(style: SpecStyle) -> &'static [&'static str] {
    match style {
        SpecStyle::RSpec => &["-f", "s"],
        SpecStyle::Generic | SpecStyle::XUnit | SpecStyle::TSpec => &[],
    }
}

fn named_bindings<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!(".{name}({name})"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn render(module: &ModuleDescriptor, output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);
    let clock = module.clock_port().map(|p| p.name());

    w.line(&format!("module {};", output.verilog_bench_name()));
    w.indent();

    if !module.parameters().is_empty() {
        w.blank();
        w.line("// configuration for the design under test");
        for param in module.parameters() {
            w.line(&format!("parameter {};", param.raw()));
        }
    }

    w.blank();
    w.line("// accessors for the design under test");
    for port in module.ports() {
        w.line(port.harness_declaration());
    }

    w.blank();
    w.line("// instantiate the design under test");
    let params = named_bindings(module.parameters().iter().map(|p| p.name()));
    let ports = named_bindings(module.ports().iter().map(|p| p.name()));
    let config = if params.is_empty() {
        String::new()
    } else {
        format!(" #({params})")
    };
    w.line(&format!(
        "{}{config} {} ({ports});",
        module.name(),
        output.instance_name()
    ));

    let bench_path = output.ruby_bench_path().display().to_string();
    let args = ["-w", bench_path.as_str()]
        .iter()
        .chain(init_args(output.style()))
        .map(|a| format!("\"{a}\""))
        .collect::<Vec<_>>()
        .join(", ");

    w.blank();
    w.line("// interface to the host-language bench");
    w.block("initial begin", "end", |w| {
        if let Some(clk) = clock {
            w.line(&format!("{clk} = 0;"));
        }
        w.line(&format!("$ruby_init({args});"));
    });

    if let Some(clk) = clock {
        w.blank();
        w.line("// generate a 50% duty-cycle clock for the design under test");
        w.block("always begin", "end", |w| {
            w.line(&format!("#{HALF_PERIOD} {clk} = ~{clk};"));
        });

        w.blank();
        w.line("// transfer control to the host-language bench every clock cycle");
        w.block(&format!("always @(posedge {clk}) begin"), "end", |w| {
            w.line("$ruby_relay();");
        });
    }

    w.blank();
    w.unindent();
    w.line("endmodule");
    w.finish()
}
