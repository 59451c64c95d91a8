// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
//! A minimal optional value: a [`Maybe`] is either [`Maybe::Present`] with a value, or [`Maybe::Absent`].
//!
//! Build values with [`present`] and [`absent`], check them with [`Maybe::is_present`] and
//! [`Maybe::is_absent`], and narrow them to their payload with `match`.

pub mod maybe;
pub mod never;

pub use maybe::{absent, present, Maybe};
pub use never::Never;
