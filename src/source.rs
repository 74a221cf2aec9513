//! Gesture sources.
//!
//! A [`GestureSource`] is the seam to the recognition subsystem: whatever
//! samples touches and runs the recognizers implements it and reports the
//! handlers whose state changed since the last poll.

use crate::gesture::GestureHandler;

pub trait GestureSource: Send {
    /// Handlers that changed since the previous call, in change order.
    fn poll(&mut self) -> Vec<GestureHandler>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}

/// Source that replays handlers fed to it by hand.
#[derive(Default)]
pub struct ScriptedSource {
    id: String,
    name: String,
    pending: Vec<GestureHandler>,
}

impl ScriptedSource {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            pending: Vec::new(),
        }
    }

    /// Queue a handler snapshot for the next poll.
    pub fn feed(&mut self, handler: GestureHandler) {
        self.pending.push(handler);
    }

    pub fn feed_all(&mut self, handlers: impl IntoIterator<Item = GestureHandler>) {
        self.pending.extend(handlers);
    }
}

impl GestureSource for ScriptedSource {
    fn poll(&mut self) -> Vec<GestureHandler> {
        std::mem::take(&mut self.pending)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{HandlerCommon, TapData};

    #[test]
    fn poll_drains_queue() {
        let mut src = ScriptedSource::new("scripted:0", "Scripted");
        src.feed(GestureHandler::new(HandlerCommon::default(), TapData.into()));

        assert_eq!(src.poll().len(), 1);
        assert!(src.poll().is_empty());
    }
}
