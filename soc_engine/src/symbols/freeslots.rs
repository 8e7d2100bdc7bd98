//! Named slots allocated past the end of the static state and object type
//! tables.

use crate::catalog;

/// One fixed-capacity pool of user-named enumeration values.
#[derive(Debug, Clone)]
pub struct SlotPool {
    kind: &'static str,
    first: usize,
    capacity: usize,
    names: Vec<String>,
}

impl SlotPool {
    pub fn new(kind: &'static str, first: usize, capacity: usize) -> Self {
        Self {
            kind,
            first,
            capacity,
            names: Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Enumeration value of the first free slot.
    pub fn first(&self) -> usize {
        self.first
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Claims the next free slot for `name`, returning its enumeration value.
    /// Slots are handed out in order and never reused.
    pub fn allocate(&mut self, name: &str) -> Option<usize> {
        if self.names.len() >= self.capacity {
            return None;
        }
        self.names.push(name.to_string());
        Some(self.first + self.names.len() - 1)
    }

    /// Enumeration value of the first slot named exactly `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|slot| slot == name)
            .map(|index| self.first + index)
    }

    /// Name held by enumeration value `value`, if it is an allocated slot.
    pub fn name_of(&self, value: usize) -> Option<&str> {
        value
            .checked_sub(self.first)
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

/// State and object type free slots.
#[derive(Debug, Clone)]
pub struct FreeSlots {
    pub states: SlotPool,
    pub mobjs: SlotPool,
}

impl Default for FreeSlots {
    fn default() -> Self {
        Self {
            states: SlotPool::new(
                "State",
                catalog::s_firstfreeslot(),
                catalog::NUMSTATEFREESLOTS,
            ),
            mobjs: SlotPool::new(
                "MobjType",
                catalog::mt_firstfreeslot(),
                catalog::NUMMOBJFREESLOTS,
            ),
        }
    }
}

impl FreeSlots {
    pub fn clear(&mut self) {
        self.states.clear();
        self.mobjs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_fill_in_order_after_the_static_range() {
        let mut pool = SlotPool::new("State", 100, 2);
        assert_eq!(pool.allocate("FOO"), Some(100));
        assert_eq!(pool.allocate("BAR"), Some(101));
        assert_eq!(pool.allocate("BAZ"), None);
        assert_eq!(pool.find("BAR"), Some(101));
        assert_eq!(pool.name_of(100), Some("FOO"));
        assert_eq!(pool.name_of(99), None);
    }

    #[test]
    fn clearing_restarts_allocation() {
        let mut slots = FreeSlots::default();
        let first = slots.mobjs.allocate("FOO");
        slots.clear();
        assert!(slots.mobjs.is_empty());
        assert_eq!(slots.mobjs.allocate("BAR"), first);
    }
}
