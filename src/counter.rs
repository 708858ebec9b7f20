// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter

use kas::event::EventMgr;
use kas::macros::impl_singleton;
use kas::prelude::*;
use kas::widgets::{Label, Row, TextButton};

use crate::state::{Control, CounterState};
use crate::view;

pub fn window() -> Box<dyn Window> {
    let state = CounterState::new();
    let root = view::render(&state);
    let buttons: Vec<TextButton> = root
        .buttons()
        .map(|(node, control)| {
            log::trace!("button {}: {:?}", node.test_id, control);
            TextButton::new_msg(format!("&{}", node.text()), control)
        })
        .collect();
    let (display, error) = view::labels(&state);

    Box::new(impl_singleton! {
        #[derive(Debug)]
        #[widget {
            layout = column: [
                align(center): self.display,
                self.buttons,
                self.error,
            ];
        }]
        struct {
            core: widget_core!(),
            #[widget] display: Label<String> = Label::new(display),
            #[widget] buttons: Row<TextButton> = Row::new_vec(buttons),
            // Empty while no error is shown
            #[widget] error: Label<String> = Label::new(error),
            state: CounterState = state,
        }
        impl Widget for Self {
            fn handle_message(&mut self, mgr: &mut EventMgr, _: usize) {
                if let Some(control) = mgr.try_pop_msg::<Control>() {
                    self.state.apply(control);
                    log::debug!("counter: {:?} -> {:?}", control, self.state);

                    let (display, error) = view::labels(&self.state);
                    *mgr |= self.display.set_string(display);
                    *mgr |= self.error.set_string(error);
                }
            }
        }
        impl Window for Self {
            fn title(&self) -> &str {
                "Counter"
            }
        }
    })
}
