mod validation;

pub use validation::{has_http_scheme, is_valid_http_url};

const MAX_FILENAME_LEN: usize = 60;

pub fn format_number(num: u64) -> String {
    let num_str = num.to_string();
    let chars: Vec<char> = num_str.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Turns a media title into a safe download file stem.
///
/// Every character outside `[A-Za-z0-9_.-]` becomes `_`, the result is cut
/// to 60 characters and an empty title falls back to `video`.
pub fn sanitize_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILENAME_LEN)
        .collect();

    if stem.is_empty() {
        "video".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(10000), "10,000");
        assert_eq!(format_number(100000), "100,000");
        assert_eq!(format_number(1000000), "1,000,000");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Bad/Name:Test*1"), "Bad_Name_Test_1");
        assert_eq!(sanitize_filename("clip-01_final.v2"), "clip-01_final.v2");
        assert_eq!(sanitize_filename("my video"), "my_video");
        assert_eq!(sanitize_filename("café"), "caf_");
        assert_eq!(sanitize_filename(""), "video");
    }

    #[test]
    fn test_sanitize_filename_truncates() {
        let long = "a".repeat(100);
        assert_eq!(sanitize_filename(&long).len(), 60);

        let mixed = "x/".repeat(40);
        let stem = sanitize_filename(&mixed);
        assert_eq!(stem.len(), 60);
        assert!(stem.starts_with("x_x_"));
    }
}
