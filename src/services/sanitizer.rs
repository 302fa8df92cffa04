// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

const PREAMBLE_PATTERNS: &[&str] = &[
    "here's the commit message:",
    "here is the commit message:",
    "commit message:",
    "suggested commit:",
];

const QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('\'', '\''), ('`', '`')];

pub struct ResponseSanitizer;

impl ResponseSanitizer {
    /// Strip the wrapping a chat model tends to add around a commit message:
    /// surrounding whitespace, a single enclosing code fence, a leading
    /// "commit message:" preamble and matching outer quotes.
    pub fn clean(raw: &str) -> String {
        let mut cleaned = raw.trim();

        cleaned = Self::strip_fence(cleaned);
        cleaned = Self::strip_preamble(cleaned);
        cleaned = Self::strip_quotes(cleaned);

        cleaned.to_string()
    }

    fn strip_fence(text: &str) -> &str {
        let Some(inner) = text
            .strip_prefix("```")
            .and_then(|rest| rest.strip_suffix("```"))
        else {
            return text;
        };

        // Drop an info string such as ```text
        match inner.split_once('\n') {
            Some((info, body)) if !info.trim().contains(' ') => body.trim(),
            _ => inner.trim(),
        }
    }

    fn strip_preamble(text: &str) -> &str {
        for pattern in PREAMBLE_PATTERNS {
            if let Some(head) = text.get(..pattern.len())
                && head.eq_ignore_ascii_case(pattern)
            {
                return text[pattern.len()..].trim();
            }
        }
        text
    }

    fn strip_quotes(text: &str) -> &str {
        for (open, close) in QUOTE_PAIRS {
            if let Some(inner) = text
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
                && !inner.contains(*close)
            {
                return inner.trim();
            }
        }
        text
    }
}
