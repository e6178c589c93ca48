use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    if let Some(parent) = path_obj.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create output directory: {}", e))?;
        }
    }

    Ok(())
}

/// Parses a BCP 47 language code, accepting `_` as a subtag separator.
///
/// The primary language subtag must be two or three letters, which rules out
/// catalog names such as `messages` that are syntactically valid identifiers.
pub fn validate_language_code(lang: &str) -> Result<LanguageIdentifier, String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    let invalid = || {
        format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )
    };
    let lang_id = lang
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map_err(|_| invalid())?;
    if !(2..=3).contains(&lang_id.language.as_str().len()) {
        return Err(invalid());
    }
    Ok(lang_id)
}

/// Works out the language of a catalog from its path: the file stem
/// (`po/fr.po`), or else the parent directory (`fr/messages.po`).
pub fn language_from_path(path: &str) -> Result<LanguageIdentifier, String> {
    let path_obj = Path::new(path);
    let stem = path_obj
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    validate_language_code(&stem).or_else(|err| {
        path_obj
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|dir| validate_language_code(&dir.to_string_lossy()).ok())
            .ok_or(err)
    })
}
