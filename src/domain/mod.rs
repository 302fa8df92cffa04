// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod change;
mod commit;
mod context;
mod message;
mod summary;

pub use change::*;
pub use commit::*;
pub use context::*;
pub use message::*;
pub use summary::*;
