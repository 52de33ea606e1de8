//! Path and basename extraction from URLs or bare file names.

/// Returns the path component of `raw`.
///
/// Absolute URLs are parsed with the `url` crate and yield their (still
/// percent-encoded) path. Anything that does not parse as an absolute URL is
/// treated as a bare path; a query string or fragment is cut off so that
/// relative references like `/uploads/a.jpg?ver=2` reduce the same way.
pub fn path_component(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => {
            let end = raw.find(['?', '#']).unwrap_or(raw.len());
            raw[..end].to_string()
        }
    }
}

/// Last `/`-separated segment of `path`. Empty when the path ends in `/`.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Splits a file name into stem and extension (extension includes the dot).
///
/// The extension is the text from the last `.` on, provided that dot is neither
/// the first nor the last character: `.htaccess` and `name.` have no extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}
