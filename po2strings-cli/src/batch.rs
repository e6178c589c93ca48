use std::collections::HashMap;
use std::path::{Path, PathBuf};

use po2strings::{Conversion, ConvertOptions, convert_file_to};
use rayon::prelude::*;
use unic_langid::LanguageIdentifier;

use crate::convert::warning_suffix;
use crate::path_glob::expand_catalog_globs;
use crate::validation::{language_from_path, validate_file_path};

/// One catalog and the table it is converted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub input: String,
    pub language: LanguageIdentifier,
    pub output: PathBuf,
}

/// `<lang>.lproj/<table>.strings` under `output_dir`.
pub fn table_path(output_dir: &Path, language: &LanguageIdentifier, table: &str) -> PathBuf {
    output_dir
        .join(format!("{}.lproj", language))
        .join(format!("{}.strings", table))
}

fn normalize_table(table: &str) -> Result<&str, String> {
    let table = table.trim();
    let table = table.strip_suffix(".strings").unwrap_or(table);
    if table.is_empty() || table.contains(['/', '\\']) {
        return Err(format!("Invalid table name: {}", table));
    }
    Ok(table)
}

/// Expands the inputs and works out where every catalog goes. Fails before
/// anything is written when an input is missing, has no recognizable
/// language, or two catalogs map to the same language.
pub fn plan_batch(inputs: &[String], output_dir: &str, table: &str) -> Result<Vec<BatchJob>, String> {
    let table = normalize_table(table)?;
    let files = expand_catalog_globs(inputs)?;
    if files.is_empty() {
        return Err("No input catalogs given".to_string());
    }

    let mut seen: HashMap<LanguageIdentifier, String> = HashMap::new();
    let mut jobs = Vec::with_capacity(files.len());
    for input in files {
        validate_file_path(&input)?;
        let language = language_from_path(&input)
            .map_err(|e| format!("Cannot determine language of {}: {}", input, e))?;
        if let Some(previous) = seen.insert(language.clone(), input.clone()) {
            return Err(format!(
                "Both {} and {} are catalogs for language {}",
                previous, input, language
            ));
        }
        jobs.push(BatchJob {
            output: table_path(Path::new(output_dir), &language, table),
            input,
            language,
        });
    }
    Ok(jobs)
}

fn run_job(job: &BatchJob, options: &ConvertOptions) -> Result<Conversion, String> {
    if let Some(parent) = job.output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create output directory: {}", e))?;
    }
    convert_file_to(&job.input, &job.output, options).map_err(|e| e.to_string())
}

/// Run the batch command: convert every matched catalog in parallel into an
/// `.lproj` tree.
pub fn run_batch_command(
    inputs: &[String],
    output_dir: &str,
    table: &str,
    options: &ConvertOptions,
) -> Result<(), String> {
    let jobs = plan_batch(inputs, output_dir, table)?;
    log::info!("Converting {} catalogs into {}", jobs.len(), output_dir);

    let results: Vec<Result<Conversion, String>> =
        jobs.par_iter().map(|job| run_job(job, options)).collect();

    let mut failed = 0;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(conversion) => println!(
                "✅ {} -> {}{}",
                job.input,
                job.output.display(),
                warning_suffix(&conversion)
            ),
            Err(e) => {
                failed += 1;
                eprintln!("❌ {}: {}", job.input, e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} catalogs failed", failed, jobs.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path, name: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, "#: a.c:1\nmsgid \"Yes\"\nmsgstr \"Oui\"\n").unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_table_path() {
        let lang: LanguageIdentifier = "pt-BR".parse().unwrap();
        assert_eq!(
            table_path(Path::new("out"), &lang, "Localizable"),
            PathBuf::from("out/pt-BR.lproj/Localizable.strings")
        );
    }

    #[test]
    fn test_normalize_table() {
        assert_eq!(normalize_table("InfoPlist.strings").unwrap(), "InfoPlist");
        assert_eq!(normalize_table(" Main ").unwrap(), "Main");
        assert!(normalize_table("").is_err());
        assert!(normalize_table("a/b").is_err());
    }

    #[test]
    fn test_plan_batch() {
        let temp_dir = TempDir::new().unwrap();
        let fr = write_catalog(temp_dir.path(), "fr.po");
        let de = write_catalog(temp_dir.path(), "de.po");

        let jobs = plan_batch(&[fr.clone(), de], "out", "Localizable").unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].input, fr);
        assert_eq!(jobs[1].language.to_string(), "fr");
        assert_eq!(
            jobs[1].output,
            PathBuf::from("out/fr.lproj/Localizable.strings")
        );
    }

    #[test]
    fn test_plan_batch_rejects_duplicate_language() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_catalog(temp_dir.path(), "pt_BR.po");
        let b = write_catalog(temp_dir.path(), "pt-BR.po");

        let err = plan_batch(&[a, b], "out", "Localizable").unwrap_err();
        assert!(err.contains("pt-BR"));
    }

    #[test]
    fn test_plan_batch_rejects_unknown_language() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_catalog(temp_dir.path(), "catalogue.po");

        let err = plan_batch(&[input], "out", "Localizable").unwrap_err();
        assert!(err.contains("Cannot determine language"));
    }

    #[test]
    fn test_run_batch_writes_lproj_tree() {
        let temp_dir = TempDir::new().unwrap();
        let fr = write_catalog(temp_dir.path(), "fr.po");
        let out = temp_dir.path().join("out");

        run_batch_command(&[fr], out.to_str().unwrap(), "Localizable", &ConvertOptions::new())
            .unwrap();

        let bytes = std::fs::read(out.join("fr.lproj").join("Localizable.strings")).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
    }
}
