//! URL modeling and identifier derivation.
//!
//! Maps a full URL or a bare file name to the stem used as the join key between
//! the legacy and the new inventory, and derives suffixed file names for
//! generated URLs.

mod path;
mod percent;

pub use path::{basename, path_component, split_extension};
pub use percent::percent_decode;

/// Derives the comparison stem of a URL or file name.
///
/// Takes the path (URL or bare), percent-decodes it, keeps the last segment,
/// strips the final extension, lowercases and trims. Never fails: input that is
/// not a URL is treated as a bare path. Returns an empty string for empty input
/// or a path with no final segment (e.g. `https://example.com/`).
///
/// # Examples
///
/// - `normalize("https://old.example.com/wp-content/uploads/2019/05/Logo%20Final.PNG")` → `"logo final"`
/// - `normalize("Logo Final.png")` → `"logo final"`
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let decoded = percent_decode(&path_component(raw));
    let (stem, _) = split_extension(basename(&decoded));
    stem.to_lowercase().trim().to_string()
}

/// Inserts `suffix` between the stem and the extension of `file_name`.
///
/// An empty suffix returns the name unchanged.
pub fn insert_suffix(file_name: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return file_name.to_string();
    }
    let (stem, ext) = split_extension(file_name);
    format!("{stem}{suffix}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_full_url() {
        assert_eq!(
            normalize("https://old.example.com/wp-content/uploads/2019/05/Logo%20Final.PNG"),
            "logo final"
        );
        assert_eq!(
            normalize("http://o/x.jpg?resize=300%2C200"),
            "x"
        );
    }

    #[test]
    fn normalize_bare_name() {
        assert_eq!(normalize("Logo Final.png"), "logo final");
        assert_eq!(normalize("  Banner.WEBP"), "banner");
        assert_eq!(normalize("contrato.v2.pdf"), "contrato.v2");
    }

    #[test]
    fn normalize_url_and_local_name_agree() {
        assert_eq!(
            normalize("https://old.example.com/uploads/caf%C3%A9-d%C3%ADa.jpg"),
            normalize("Café-Día.jpeg")
        );
    }

    #[test]
    fn normalize_empty_and_rootless() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("https://example.com/"), "");
        assert_eq!(normalize("https://example.com"), "");
    }

    #[test]
    fn normalize_never_panics_on_junk() {
        for raw in ["%", "%%%", "://", "?", "#", ".", "..", "http://[::1", "\u{0}\u{7f}"] {
            let _ = normalize(raw);
        }
    }

    #[test]
    fn normalize_is_idempotent_on_typical_inputs() {
        for raw in [
            "https://old.example.com/uploads/Foto%20Equipo.JPG",
            "Foto Equipo.jpg",
            "  firma-digital.webp ",
            "https://example.com/a/b/",
            "README",
            "",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn insert_suffix_before_extension() {
        assert_eq!(insert_suffix("x.jpg", "-1"), "x-1.jpg");
        assert_eq!(insert_suffix("a.tar.gz", "-scaled"), "a.tar-scaled.gz");
        assert_eq!(insert_suffix("README", "-1"), "README-1");
        assert_eq!(insert_suffix("x.jpg", ""), "x.jpg");
    }
}
