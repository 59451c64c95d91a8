// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
use std::cell::Cell;

use maybe::{absent, present, Maybe};

/// A record with several fields, to check that compound payloads survive a round-trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub a: i32,
    pub b: String,
}

pub fn record(a: i32, b: &str) -> Record {
    Record { a, b: b.to_string() }
}

/// Returns a message for strictly positive inputs, nothing otherwise
pub fn describe_sign(value: i32) -> Maybe<&'static str> {
    if value > 0 {
        present("Value is positive")
    } else {
        absent()
    }
}

/// Counts how many times the functions it hands out are called
#[derive(Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }

    /// Wrap `f` so that each call is counted
    pub fn wrap<'a, T, U>(&'a self, f: impl FnOnce(T) -> U + 'a) -> impl FnOnce(T) -> U + 'a {
        move |value| {
            self.0.set(self.0.get() + 1);
            f(value)
        }
    }

    /// Produce `value`, counting the evaluation
    pub fn eval<T>(&self, value: T) -> T {
        self.0.set(self.0.get() + 1);
        value
    }
}

/// Extract the payload of a value expected to be present
pub fn payload<T>(value: Maybe<T>) -> T {
    match value {
        Maybe::Present(value) => value,
        Maybe::Absent => panic!("Expected a present value, got absent"),
    }
}
