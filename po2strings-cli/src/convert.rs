use std::fs::File;
use std::io::BufWriter;

use po2strings::{Conversion, ConvertOptions, convert_file};

use crate::validation::validate_output_path;

/// Run the convert command: convert one catalog to a file, or to stdout when
/// no output is given.
pub fn run_convert_command(
    input: &str,
    output: Option<&str>,
    options: &ConvertOptions,
) -> Result<(), String> {
    let conversion = convert_file(input, options).map_err(|e| e.to_string())?;

    match output {
        Some(output) => {
            write_output(&conversion, output, options)?;
            println!(
                "✅ Converted {} to {} ({}){}",
                input,
                output,
                options.output_encoding,
                warning_suffix(&conversion)
            );
        }
        None => {
            let stdout = std::io::stdout();
            conversion
                .write_to(stdout.lock(), options.output_encoding)
                .map_err(|e| format!("Error writing to stdout: {}", e))?;
        }
    }
    Ok(())
}

fn write_output(conversion: &Conversion, output: &str, options: &ConvertOptions) -> Result<(), String> {
    validate_output_path(output)?;
    let file = File::create(output).map_err(|e| format!("Error writing to {}: {}", output, e))?;
    conversion
        .write_to(BufWriter::new(file), options.output_encoding)
        .map_err(|e| format!("Error writing to {}: {}", output, e))
}

pub(crate) fn warning_suffix(conversion: &Conversion) -> String {
    match conversion.diagnostics.len() {
        0 => String::new(),
        1 => " with 1 warning".to_string(),
        n => format!(" with {} warnings", n),
    }
}
