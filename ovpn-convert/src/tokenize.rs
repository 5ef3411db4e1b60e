//! Whitespace tokenizer with double-quote grouping.

const DELIMITERS: [char; 2] = [' ', '\t'];

/// Forward-only iterator over the tokens of one configuration line.
///
/// A token is a maximal run of non-delimiter characters. A token that
/// opens with `"` instead runs to the next `"` (or end of line), with
/// delimiters inside preserved verbatim and the quotes stripped.
/// Tokens borrow from the input line; nothing is copied or rescanned.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let s = self.rest.trim_start_matches(DELIMITERS);
        if s.is_empty() {
            self.rest = s;
            return None;
        }

        if let Some(body) = s.strip_prefix('"') {
            // Quoted token: runs to the closing quote, or to end of
            // line when unterminated.
            match body.find('"') {
                Some(end) => {
                    self.rest = &body[end + 1..];
                    Some(&body[..end])
                }
                None => {
                    self.rest = "";
                    Some(body)
                }
            }
        } else {
            match s.find(DELIMITERS) {
                Some(end) => {
                    self.rest = &s[end + 1..];
                    Some(&s[..end])
                }
                None => {
                    self.rest = "";
                    Some(s)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tokens;

    fn tokens(line: &str) -> Vec<&str> {
        Tokens::new(line).collect()
    }

    #[test]
    fn splits_on_spaces_and_tabs() {
        assert_eq!(
            tokens("remote vpn.example.com\t1194 udp"),
            ["remote", "vpn.example.com", "1194", "udp"]
        );
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert_eq!(tokens(""), Vec::<&str>::new());
        assert_eq!(tokens("   \t  "), Vec::<&str>::new());
    }

    #[test]
    fn quoted_token_keeps_embedded_delimiters() {
        assert_eq!(
            tokens("push \"route 10.0.0.0 255.255.255.0\""),
            ["push", "route 10.0.0.0 255.255.255.0"]
        );
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        assert_eq!(tokens("setenv \"opt value"), ["setenv", "opt value"]);
    }

    #[test]
    fn quote_only_matters_at_token_start() {
        assert_eq!(tokens("a\"b c"), ["a\"b", "c"]);
    }

    #[test]
    fn text_after_closing_quote_starts_a_new_token() {
        assert_eq!(tokens("\"ab\"cd"), ["ab", "cd"]);
    }
}
