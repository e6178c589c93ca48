use po2strings::{Conversion, ConvertOptions, Diagnostic, convert_file};
use serde::Serialize;

/// Machine-readable result of `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub file: &'a str,
    pub translated: usize,
    pub untranslated: usize,
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> CheckReport<'a> {
    pub fn new(file: &'a str, conversion: &'a Conversion) -> Self {
        CheckReport {
            file,
            translated: conversion.translated,
            untranslated: conversion.untranslated,
            diagnostics: &conversion.diagnostics,
        }
    }
}

/// Run the check command: convert without writing and report what the
/// converter found. With `strict`, any diagnostic fails the command.
pub fn run_check_command(
    input: &str,
    options: &ConvertOptions,
    json: bool,
    strict: bool,
) -> Result<(), String> {
    let conversion = convert_file(input, options).map_err(|e| e.to_string())?;
    let report = CheckReport::new(input, &conversion);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", out);
    } else {
        print_report(&report);
    }

    if strict && !report.diagnostics.is_empty() {
        return Err(format!(
            "{} diagnostic(s) reported for {}",
            report.diagnostics.len(),
            input
        ));
    }
    Ok(())
}

fn print_report(report: &CheckReport) {
    for diagnostic in report.diagnostics {
        println!("{}: {}", report.file, diagnostic);
    }
    let counts = format!(
        "{} translated, {} untranslated",
        report.translated, report.untranslated
    );
    if report.diagnostics.is_empty() {
        println!("✅ {}: no problems found ({})", report.file, counts);
    } else {
        println!(
            "⚠️  {}: {} warning(s) ({})",
            report.file,
            report.diagnostics.len(),
            counts
        );
    }
}
