//! Raw model output cleanup.
//!
//! The model runs as if attached to an interactive shell and echoes prompt
//! artifacts (`>>> ...`) into stdout. Those lines are dropped before the
//! text is shown to anyone.

/// Interactive prompt marker echoed by the model process.
pub const PROMPT_MARKER: &str = ">>>";

/// Reply used when the model produced nothing usable.
pub const FALLBACK_REPLY: &str = "I'm here, but something glitched—try asking me again?";

/// Summary used when the model produced nothing usable.
pub const FALLBACK_SUMMARY: &str = "Something went blank—try again.";

/// Drop every line whose trimmed text starts with the prompt marker,
/// rejoin the rest and trim the result.
pub fn strip_prompt_echoes(raw: &str) -> String {
    raw.trim()
        .split('\n')
        .filter(|line| !line.trim().starts_with(PROMPT_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Clean chat output, never returning an empty string.
pub fn extract_reply(raw: &str) -> String {
    non_empty_or(strip_prompt_echoes(raw), FALLBACK_REPLY)
}

/// Clean summary output, never returning an empty string.
pub fn extract_summary(raw: &str) -> String {
    non_empty_or(strip_prompt_echoes(raw), FALLBACK_SUMMARY)
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_echo_lines_are_dropped() {
        let raw = ">>> loading\nHello there\n>>> done";
        assert_eq!(extract_reply(raw), "Hello there");
    }

    #[test]
    fn test_indented_marker_is_dropped() {
        let raw = "hey!\n   >>> still thinking\nwhat's up?";
        assert_eq!(extract_reply(raw), "hey!\nwhat's up?");
    }

    #[test]
    fn test_marker_mid_line_is_kept() {
        let raw = "arrows look like >>> this";
        assert_eq!(extract_reply(raw), "arrows look like >>> this");
    }

    #[test]
    fn test_blank_output_uses_fallback() {
        assert_eq!(extract_reply(""), FALLBACK_REPLY);
        assert_eq!(extract_reply("  \n\t \n"), FALLBACK_REPLY);
        assert_eq!(extract_reply(">>> \n>>> bye"), FALLBACK_REPLY);
    }

    #[test]
    fn test_summary_fallback_differs_from_reply_fallback() {
        assert_eq!(extract_summary("\n"), FALLBACK_SUMMARY);
        assert_eq!(
            extract_summary("  They talked about tea.  "),
            "They talked about tea."
        );
    }

    #[test]
    fn test_inner_blank_lines_survive() {
        let raw = "first\n\nsecond\n";
        assert_eq!(strip_prompt_echoes(raw), "first\n\nsecond");
    }
}
