// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter state and transitions
//!
//! The counter never goes below zero. Attempting to do so leaves it at zero
//! and raises `error_msg` until the next successful transition.

/// A control message, sent by one of the counter buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Increment,
    Decrement,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counter: usize,
    /// Set iff the last transition was a decrement at zero
    pub error_msg: bool,
}

impl CounterState {
    pub fn new() -> Self {
        CounterState::with_counter(0)
    }

    pub fn with_counter(counter: usize) -> Self {
        CounterState {
            counter,
            error_msg: false,
        }
    }

    /// Apply `control` in place
    pub fn apply(&mut self, control: Control) {
        *self = transition(*self, control);
    }
}

pub fn transition(state: CounterState, control: Control) -> CounterState {
    match control {
        Control::Increment => CounterState {
            counter: state.counter.saturating_add(1),
            error_msg: false,
        },
        Control::Decrement => match state.counter.checked_sub(1) {
            Some(counter) => CounterState {
                counter,
                error_msg: false,
            },
            None => CounterState {
                counter: 0,
                error_msg: true,
            },
        },
    }
}
