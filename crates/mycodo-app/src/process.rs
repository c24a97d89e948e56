//! Message processing: run `update` and its follow-up messages to completion

use crate::handler::update;
use crate::message::Message;
use crate::state::AppState;
use mycodo_core::prelude::*;

/// Upper bound on chained follow-up messages for one input
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message and every follow-up message it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    let mut steps = 0;

    while let Some(msg) = next.take() {
        if steps > MAX_FOLLOW_UPS {
            warn!("Dropping follow-up chain after {} steps: {:?}", steps, msg);
            break;
        }
        next = update(state, msg).message;
        steps += 1;
    }
}
