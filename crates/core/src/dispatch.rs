// Marshals native callbacks into the UI context

use crate::error::{PlayerError, Result};
use crate::native::{NativeEvent, NativeEventKind};
use crossbeam_channel::{Receiver, SendError, Sender};
use std::thread::{self, ThreadId};

/// Cloneable handle native threads use to post callbacks.
///
/// Posting never blocks and never mutates player state; the event waits in
/// the queue until the UI context drains it. Prepared, error and completion
/// callbacks are always queued. Info callbacks are shed once `info_limit`
/// events are waiting.
#[derive(Debug, Clone)]
pub struct NativeEventSender {
    sender: Sender<NativeEvent>,
    info_limit: usize,
}

impl NativeEventSender {
    /// Returns `false` if the event was dropped.
    pub fn post(&self, event: NativeEvent) -> bool {
        if matches!(event.kind, NativeEventKind::Info { .. }) && self.sender.len() >= self.info_limit
        {
            log::warn!("Native event queue backed up, shedding {:?}", event);
            return false;
        }

        match self.sender.send(event) {
            Ok(()) => true,
            Err(SendError(event)) => {
                log::debug!("Player released, dropping {:?}", event);
                false
            }
        }
    }
}

/// Queue owned by the UI context.
///
/// The thread that creates the dispatcher is the only one allowed to drain
/// it; that is where all state mutation happens.
#[derive(Debug)]
pub struct UiDispatcher {
    sender: Sender<NativeEvent>,
    receiver: Receiver<NativeEvent>,
    owner: ThreadId,
    info_limit: usize,
}

impl UiDispatcher {
    /// `info_limit` bounds how many queued events info callbacks may pile onto.
    pub fn new(info_limit: usize) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            sender,
            receiver,
            owner: thread::current().id(),
            info_limit: info_limit.max(1),
        }
    }

    pub fn sender(&self) -> NativeEventSender {
        NativeEventSender {
            sender: self.sender.clone(),
            info_limit: self.info_limit,
        }
    }

    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Hands every queued event to `handle`, in arrival order.
    pub fn drain<F>(&self, mut handle: F) -> Result<usize>
    where
        F: FnMut(NativeEvent),
    {
        if !self.is_ui_thread() {
            return Err(PlayerError::ThreadAffinity);
        }

        let mut handled = 0;
        while let Ok(event) = self.receiver.try_recv() {
            handle(event);
            handled += 1;
        }
        Ok(handled)
    }

    /// Throws away queued events without handling them.
    pub fn discard_pending(&self) -> usize {
        self.receiver.try_iter().count()
    }
}
