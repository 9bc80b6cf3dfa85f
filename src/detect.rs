/*!
 * Binary content detection
 *
 * Classification is advisory only: it decides whether a section carries
 * literal content or the binary placeholder, never whether a file is
 * included at all.
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;

/// Number of leading bytes sniffed for classification
const SNIFF_LEN: usize = 512;

/// Fraction of non-text bytes above which a sample counts as binary
const SUSPICIOUS_RATIO: f32 = 0.3;

/// Extensions that are always treated as binary
static BINARY_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Images
        "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
        // Documents
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp",
        // Archives
        "zip", "7z", "rar", "tar", "gz", "bz2", "xz",
        // Audio/Video
        "mp3", "wav", "flac", "aac", "ogg", "m4a", "mp4", "mkv", "mov", "avi", "webm",
        // Fonts
        "ttf", "otf", "woff", "woff2",
        // Other binary
        "exe", "dll", "so", "dylib", "bin", "dat",
    ]
});

/// Check whether a file should be treated as binary.
///
/// A known binary extension is immediately decisive. Otherwise the first
/// 512 bytes are sniffed: a NUL byte means binary, as does a high share
/// of bytes that are neither common whitespace, printable ASCII, nor
/// plausible UTF-8 multi-byte content. Read errors fall back to "text"
/// so the merge step surfaces the real error.
pub fn is_probably_binary(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if BINARY_EXTENSIONS.iter().any(|&e| e == ext) {
            return true;
        }
    }

    let mut buffer = [0u8; SNIFF_LEN];
    let read = File::open(path).and_then(|mut file| file.read(&mut buffer));
    let sample = match read {
        Ok(n) => &buffer[..n],
        Err(_) => return false,
    };

    if sample.contains(&0) {
        return true;
    }

    let suspicious = sample
        .iter()
        .filter(|&&b| !matches!(b, b'\t' | b'\n' | b'\r') && !(0x20..=0x7e).contains(&b) && b < 0x80)
        .count();

    !sample.is_empty() && suspicious as f32 / sample.len() as f32 > SUSPICIOUS_RATIO
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_known_extension_is_decisive() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("image.png");
        // pure ASCII content, but the extension wins
        fs::write(&path, "plain text pretending to be an image").expect("write file");
        assert!(is_probably_binary(&path));

        let upper = dir.path().join("IMAGE.PNG");
        fs::write(&upper, "x").expect("write file");
        assert!(is_probably_binary(&upper));
    }

    #[test]
    fn test_nul_byte_means_binary() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("data.xyz");
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(b"text with a \0 in it").expect("write bytes");
        drop(file);
        assert!(is_probably_binary(&path));
    }

    #[test]
    fn test_plain_text_is_not_binary() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "ordinary text\nwith lines\n\tand tabs\n").expect("write file");
        assert!(!is_probably_binary(&path));
    }

    #[test]
    fn test_utf8_multibyte_is_not_binary() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("unicode.txt");
        fs::write(&path, "grüße aus köln: äöü ßßß").expect("write file");
        assert!(!is_probably_binary(&path));
    }

    #[test]
    fn test_control_characters_tip_the_ratio() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("garbled.xyz");
        // half control bytes, no NUL: ratio 0.5 > 0.3
        let mut bytes = Vec::new();
        for _ in 0..50 {
            bytes.push(b'a');
            bytes.push(0x01);
        }
        fs::write(&path, &bytes).expect("write file");
        assert!(is_probably_binary(&path));
    }

    #[test]
    fn test_missing_file_fails_open() {
        let dir = tempdir().expect("create temp dir");
        assert!(!is_probably_binary(&dir.path().join("does-not-exist.xyz")));
    }

    #[test]
    fn test_empty_file_is_text() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("empty.xyz");
        fs::write(&path, "").expect("write file");
        assert!(!is_probably_binary(&path));
    }
}
