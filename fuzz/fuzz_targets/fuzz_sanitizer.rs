// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_autocommit::services::sanitizer::ResponseSanitizer;

fuzz_target!(|data: &str| {
    let cleaned = ResponseSanitizer::clean(data);
    assert_eq!(cleaned.trim(), cleaned);
});
