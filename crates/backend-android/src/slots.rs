// Per-player locking for the JNI registry

use parking_lot::Mutex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

thread_local! {
    // (registry address, player id) pairs this thread currently holds
    static HELD: RefCell<Vec<(usize, i64)>> = const { RefCell::new(Vec::new()) };
}

struct HeldGuard {
    key: (usize, i64),
}

impl HeldGuard {
    fn enter(key: (usize, i64)) -> Self {
        HELD.with(|held| held.borrow_mut().push(key));
        Self { key }
    }
}

impl Drop for HeldGuard {
    fn drop(&mut self) {
        HELD.with(|held| {
            let mut held = held.borrow_mut();
            if let Some(pos) = held.iter().rposition(|key| *key == self.key) {
                held.remove(pos);
            }
        });
    }
}

/// Registry of players, each behind its own lock.
///
/// The map lock is only held long enough to clone a player's slot, so work
/// on one player never blocks callbacks for another.
pub struct PlayerSlots<T> {
    slots: Mutex<HashMap<i64, Arc<Mutex<T>>>>,
}

impl<T> PlayerSlots<T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, id: i64, value: T) {
        self.slots.lock().insert(id, Arc::new(Mutex::new(value)));
    }

    /// Removes the slot; a holder on another thread keeps it alive until done.
    pub fn remove(&self, id: i64) -> Option<Arc<Mutex<T>>> {
        self.slots.lock().remove(&id)
    }

    fn slot(&self, id: i64) -> Option<Arc<Mutex<T>>> {
        self.slots.lock().get(&id).cloned()
    }

    fn key(&self, id: i64) -> (usize, i64) {
        (self as *const Self as usize, id)
    }

    /// Runs `f` on the player, waiting for any other thread using it.
    ///
    /// Returns `None` for an unknown id.
    pub fn with<R, F>(&self, id: i64, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let slot = self.slot(id)?;
        let mut player = slot.lock();
        let _held = HeldGuard::enter(self.key(id));
        Some(f(&mut player))
    }

    /// Like [`with`](Self::with), but returns `None` instead of deadlocking
    /// when this thread is already inside `with` for the same player.
    ///
    /// A callback raised synchronously from inside a command is picked up by
    /// that command when it finishes.
    pub fn reenter<R, F>(&self, id: i64, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let key = self.key(id);
        if HELD.with(|held| held.borrow().contains(&key)) {
            log::debug!("Player {} busy on this thread, deferring", id);
            return None;
        }
        self.with(id, f)
    }
}

impl<T> Default for PlayerSlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn busy_player_does_not_block_another() {
        let slots = Arc::new(PlayerSlots::new());
        slots.insert(1, 0u32);
        slots.insert(2, 0u32);

        let (entered, wait_entered) = mpsc::channel();
        let (release, wait_release) = mpsc::channel::<()>();
        let remote = slots.clone();
        let holder = thread::spawn(move || {
            remote.with(2, |_| {
                entered.send(()).unwrap();
                wait_release.recv().unwrap();
            })
        });
        wait_entered.recv().unwrap();

        // Player 2 is held elsewhere; player 1 is still reachable
        let count = slots.reenter(1, |count| {
            *count += 1;
            *count
        });
        assert_eq!(count, Some(1));

        release.send(()).unwrap();
        holder.join().unwrap();
    }

    #[test]
    fn reentry_on_same_thread_is_deferred() {
        let slots = PlayerSlots::new();
        slots.insert(1, 0u32);

        let nested = slots.with(1, |_| slots.reenter(1, |_| ()));
        assert_eq!(nested, Some(None));
        assert_eq!(slots.reenter(1, |_| ()), Some(()));
    }

    #[test]
    fn reentry_waits_for_other_thread() {
        let slots: Arc<PlayerSlots<Vec<&'static str>>> = Arc::new(PlayerSlots::new());
        slots.insert(1, Vec::new());

        let (entered, wait_entered) = mpsc::channel();
        let remote = slots.clone();
        let holder = thread::spawn(move || {
            remote.with(1, |log| {
                entered.send(()).unwrap();
                thread::sleep(Duration::from_millis(50));
                log.push("command");
            })
        });
        wait_entered.recv().unwrap();

        // Held by another thread, so the callback waits instead of being skipped
        let settled = slots.reenter(1, |log| {
            log.push("callback");
            log.clone()
        });
        holder.join().unwrap();
        assert_eq!(settled, Some(vec!["command", "callback"]));
    }

    #[test]
    fn removed_player_is_unknown() {
        let slots = PlayerSlots::new();
        slots.insert(7, ());
        assert!(slots.remove(7).is_some());
        assert!(slots.remove(7).is_none());
        assert_eq!(slots.with(7, |_| ()), None);
    }
}
