use std::io::{self, BufRead, Write};

/// Whether a typed line satisfies the confirmation a destructive action
/// requires. `case_insensitive` covers the reboot-style "yes" prompt; the
/// factory-reset prompt demands the exact string.
pub fn answer_matches(answer: &str, expected: &str, case_insensitive: bool) -> bool {
    let answer = answer.trim_end_matches(['\r', '\n']);
    if case_insensitive {
        answer.eq_ignore_ascii_case(expected)
    } else {
        answer == expected
    }
}

/// Read one line from `reader` and check it against `expected`. EOF or a read
/// failure counts as a refusal.
pub fn confirm_from<R: BufRead>(reader: &mut R, expected: &str, case_insensitive: bool) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => false,
        Ok(_) => answer_matches(&line, expected, case_insensitive),
        Err(_) => false,
    }
}

/// Interactive confirmation gate: print `prompt`, read a line from stdin,
/// and only return true on the expected answer.
pub fn confirm(prompt: &str, expected: &str, case_insensitive: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    confirm_from(&mut handle, expected, case_insensitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reboot_prompt_accepts_yes_case_insensitively() {
        assert!(confirm_from(&mut Cursor::new("yes\n"), "yes", true));
        assert!(confirm_from(&mut Cursor::new("YES\n"), "yes", true));
        assert!(confirm_from(&mut Cursor::new("Yes\r\n"), "yes", true));
    }

    #[test]
    fn reboot_prompt_rejects_anything_else() {
        assert!(!confirm_from(&mut Cursor::new("no\n"), "yes", true));
        assert!(!confirm_from(&mut Cursor::new("y\n"), "yes", true));
        assert!(!confirm_from(&mut Cursor::new("\n"), "yes", true));
    }

    #[test]
    fn factory_reset_requires_exact_string() {
        assert!(confirm_from(
            &mut Cursor::new("FACTORY RESET\n"),
            "FACTORY RESET",
            false
        ));
        assert!(!confirm_from(
            &mut Cursor::new("factory reset\n"),
            "FACTORY RESET",
            false
        ));
        assert!(!confirm_from(
            &mut Cursor::new("FACTORY RESET please\n"),
            "FACTORY RESET",
            false
        ));
    }

    #[test]
    fn eof_counts_as_refusal() {
        assert!(!confirm_from(&mut Cursor::new(""), "yes", true));
    }
}
