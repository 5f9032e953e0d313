// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
pub(crate) mod map;
#[macro_use]
pub(crate) mod set;

pub(crate) mod default;
pub(crate) mod int;
pub(crate) mod list;
