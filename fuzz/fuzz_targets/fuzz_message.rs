// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_autocommit::services::policy::MessagePolicy;

fuzz_target!(|input: (&str, Option<&str>, u8)| {
    let (text, prefix, max_length) = input;
    let max_length = usize::from(max_length);

    let prefixed = MessagePolicy::apply_prefix(text, prefix);
    let cut = MessagePolicy::truncate(&prefixed, max_length);
    assert!(cut.chars().count() <= max_length);
});
