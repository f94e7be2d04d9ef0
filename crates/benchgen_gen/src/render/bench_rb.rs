//! Host-language harness: loads the specification and services the
//! simulator callbacks.

use super::{ruby_require, INDENT};
use crate::code_writer::CodeWriter;
use crate::output::OutputDescriptor;
use benchgen_common::SpecStyle;
use benchgen_parser::ModuleDescriptor;

/// Display name of the framework that owns control flow, if any.
pub(super) fn framework_name(style: SpecStyle) -> Option<&'static str> {
    match style {
        SpecStyle::XUnit => Some("Test::Unit"),
        SpecStyle::RSpec => Some("RSpec"),
        SpecStyle::TSpec => Some("test/spec"),
        SpecStyle::Generic => None,
    }
}

pub(super) fn render(_module: &ModuleDescriptor, output: &OutputDescriptor) -> String {
    let mut w = CodeWriter::new(INDENT);

    w.line(&ruby_require(output.spec_path()));
    w.blank();
    w.line("# service the $ruby_init() callback");
    w.line("Vpi::relay_verilog");
    w.blank();
    w.line("# service the $ruby_relay() callback");
    match framework_name(output.style()) {
        Some(framework) => w.line(&format!("# {framework} will take control from here.")),
        None => w.line(&format!("{}.new", output.spec_class_name())),
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_util::module;
    use super::*;

    fn bench(style: SpecStyle) -> String {
        let m = module("module counter(clk, reset, count);");
        render(&m, &OutputDescriptor::resolve("counter", "test", style))
    }

    #[test]
    fn generic_instantiates_spec() {
        assert_eq!(
            bench(SpecStyle::Generic),
            "require 'counter_test_spec.rb'\n\
             \n\
             # service the $ruby_init() callback\n\
             Vpi::relay_verilog\n\
             \n\
             # service the $ruby_relay() callback\n\
             CounterTestSpec.new\n"
        );
    }

    #[test]
    fn frameworks_take_control() {
        assert!(bench(SpecStyle::XUnit).ends_with("# Test::Unit will take control from here.\n"));
        assert!(bench(SpecStyle::RSpec).ends_with("# RSpec will take control from here.\n"));
        assert!(bench(SpecStyle::TSpec).ends_with("# test/spec will take control from here.\n"));
        for style in [SpecStyle::XUnit, SpecStyle::RSpec, SpecStyle::TSpec] {
            assert!(!bench(style).contains(".new"));
        }
    }
}
