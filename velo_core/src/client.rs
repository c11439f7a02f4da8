use serde::{Deserialize, Serialize};

use crate::VertexId;

/// A station to rebalance. `capacity` is the maximum number of units the
/// station can hold, `stored` is how many it currently holds and
/// `discharged` counts units that need special handling and occupy vehicle
/// capacity for the whole route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVertex {
    index: VertexId,
    capacity: i64,
    stored: i64,
    discharged: i64,
}

impl ClientVertex {
    pub fn new(index: VertexId, capacity: i64, stored: i64, discharged: i64) -> Self {
        ClientVertex {
            index,
            capacity,
            stored,
            discharged,
        }
    }

    pub fn index(&self) -> VertexId {
        self.index
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn stored(&self) -> i64 {
        self.stored
    }

    pub fn discharged(&self) -> i64 {
        self.discharged
    }

    /// Positive demand means surplus units to pick up, negative demand means
    /// a deficit to refill from the vehicle.
    pub fn demand(&self) -> i64 {
        self.capacity - self.stored
    }
}
