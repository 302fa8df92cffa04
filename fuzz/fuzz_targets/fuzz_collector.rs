// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_autocommit::services::classifier::ChangeClassifier;
use git_autocommit::services::collector::ChangeCollector;
use git_autocommit::services::heuristic::HeuristicSynthesizer;

fuzz_target!(|data: &str| {
    for changes in [
        ChangeCollector::collect(data),
        ChangeCollector::collect_records(data),
    ]
    .into_iter()
    .flatten()
    {
        let summary = ChangeClassifier::classify(&changes);
        assert_eq!(summary.total(), changes.len());
        let message = HeuristicSynthesizer::synthesize(&changes, &summary);
        assert!(!message.is_empty());
    }
});
