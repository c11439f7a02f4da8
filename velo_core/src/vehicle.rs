use serde::{Deserialize, Serialize};

/// A single vehicle of the fleet. Capacity is expressed in scaled units,
/// i.e. already multiplied by the graph's unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    capacity: i64,
}

impl Vehicle {
    pub fn new(capacity: i64) -> Self {
        Vehicle { capacity }
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }
}

/// Fleet description shared by every warehouse: `count` vehicles of the
/// given (unscaled) capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetGroup {
    pub count: usize,
    pub capacity: i64,
}

impl FleetGroup {
    pub fn new(count: usize, capacity: i64) -> Self {
        FleetGroup { count, capacity }
    }
}
