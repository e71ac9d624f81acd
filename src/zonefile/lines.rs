//! Comment and blank-line stripping for tinydns data files.

/// Drops comments and surrounding whitespace, then drops lines left empty.
///
/// A comment starts at the first `#` not preceded by a backslash.
pub fn remove_comments<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = strip_comment(line.as_ref()).trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect()
}

fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '#' if !escaped => return &line[..i],
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comments_and_blanks() {
        let input = [
            "# full line comment",
            "",
            "   ",
            "+www.example.com.:1.2.3.4:300  # trailing",
            "\tCftp.example.com.:www.example.com.:300\t",
        ];
        assert_eq!(
            remove_comments(input),
            vec![
                "+www.example.com.:1.2.3.4:300".to_string(),
                "Cftp.example.com.:www.example.com.:300".to_string(),
            ]
        );
    }

    #[test]
    fn test_escaped_hash_is_kept() {
        let out = remove_comments(["'txt.example.com.:a\\#b:300 # note"]);
        assert_eq!(out, vec!["'txt.example.com.:a\\#b:300".to_string()]);
    }

    #[test]
    fn test_escaped_backslash_does_not_escape_hash() {
        let out = remove_comments(["'txt.example.com.:a\\\\#b"]);
        assert_eq!(out, vec!["'txt.example.com.:a\\\\".to_string()]);
    }

    #[test]
    fn test_idempotent() {
        let input = [
            "  Zexample.com.:ns1.example.com.:hostmaster.example.com.  ",
            "#",
            "+a.example.com.:10.0.0.1 #x",
            "'t.example.com.:v\\#1",
        ];
        let once = remove_comments(input);
        let twice = remove_comments(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_comment_only_input_yields_nothing() {
        assert!(remove_comments(["#a", "  # b", ""]).is_empty());
    }
}
