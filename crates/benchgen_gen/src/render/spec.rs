//! Specification stub, shaped by the chosen style.

use super::{ruby_require, INDENT};
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_common::SpecStyle;
use benchgen_parser::ModuleDescriptor;

fn new_design(output: &OutputDescriptor) -> String {
    format!("@design = {}.new", output.design_class_name())
}

fn xunit_case(w: &mut CodeWriter, module: &ModuleDescriptor, output: &OutputDescriptor) {
    let class = format!("class {} < Test::Unit::TestCase", output.spec_class_name());
    w.block(&class, "end", |w| {
        w.line("include Vpi");
        w.blank();
        w.block("def setup", "end", |w| w.line(&new_design(output)));
        for port in module.ports() {
            w.blank();
            w.block(&format!("def test_{}", port.name()), "end", |_| {});
        }
    });
}

fn context(w: &mut CodeWriter, module: &ModuleDescriptor, output: &OutputDescriptor) {
    w.line("include Vpi");
    w.blank();
    let open = format!("context \"A new {}\" do", output.design_class_name());
    w.block(&open, "end", |w| {
        w.block("setup do", "end", |w| w.line(&new_design(output)));
        for port in module.ports() {
            w.blank();
            let name = port.name();
            w.block(&format!("specify \"{name} should ...\" do"), "end", |w| {
                w.line(&format!("# @design.{name}.should ..."));
            });
        }
    });
}

fn generic_class(w: &mut CodeWriter, output: &OutputDescriptor) {
    w.block(&format!("class {}", output.spec_class_name()), "end", |w| {
        w.line("include Vpi");
        w.blank();
        w.block("def initialize", "end", |w| w.line(&new_design(output)));
    });
}

pub(super) fn render(module: &ModuleDescriptor, output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);
    let style = output.style();

    w.line("# A specification which verifies the design under test.");
    w.line(&ruby_require(output.design_path()));
    w.line("require 'vpi_util'");
    match style {
        SpecStyle::XUnit => w.line("require 'test/unit'"),
        SpecStyle::RSpec => w.line("require 'rspec'"),
        SpecStyle::TSpec => w.line("require 'test/spec'"),
        SpecStyle::Generic => {}
    }
    w.blank();

    match style {
        SpecStyle::XUnit => xunit_case(&mut w, module, output),
        SpecStyle::RSpec | SpecStyle::TSpec => context(&mut w, module, output),
        SpecStyle::Generic => generic_class(&mut w, output),
    }
    w.finish()
}
