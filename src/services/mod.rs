// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod classifier;
pub mod collector;
pub mod git;
pub mod heuristic;
pub mod interact;
pub mod llm;
pub mod policy;
pub mod remote;
pub mod sanitizer;
