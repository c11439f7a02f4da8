use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::VertexId;
use crate::vehicle::Vehicle;

/// A depot vertex owning a fleet of vehicles. Warehouse indices are
/// non-positive so they never collide with client indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseVertex {
    index: VertexId,
    fleet: Vec<Vehicle>,
}

impl WarehouseVertex {
    pub fn new(index: VertexId, fleet: Vec<Vehicle>) -> Self {
        WarehouseVertex { index, fleet }
    }

    pub fn index(&self) -> VertexId {
        self.index
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    pub fn max_vehicle_capacity(&self) -> i64 {
        self.fleet
            .iter()
            .map(|vehicle| vehicle.capacity())
            .max()
            .unwrap_or(0)
    }

    /// Draws a vehicle with probability proportional to its capacity.
    ///
    /// The draw is stateless: the vehicle stays in the fleet and may be
    /// selected again for another route of the same evaluation.
    pub fn select_vehicle<R>(&self, rng: &mut R) -> &Vehicle
    where
        R: Rng,
    {
        let total_capacity: i64 = self.fleet.iter().map(|vehicle| vehicle.capacity()).sum();

        let draw = rng.random_range(0..total_capacity);

        let mut cumulative_capacity = 0;
        for vehicle in &self.fleet {
            cumulative_capacity += vehicle.capacity();

            if draw < cumulative_capacity {
                return vehicle;
            }
        }

        // total_capacity > 0 is a build-time invariant, the loop always hits.
        unreachable!("fleet with zero total capacity")
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn test_select_vehicle_prefers_larger_capacity() {
        let warehouse = WarehouseVertex::new(
            0,
            vec![Vehicle::new(1), Vehicle::new(99)],
        );

        let mut rng = SmallRng::seed_from_u64(7);
        let mut large = 0;
        for _ in 0..1000 {
            if warehouse.select_vehicle(&mut rng).capacity() == 99 {
                large += 1;
            }
        }

        // Expected share is 99%, leave a wide margin for the sampler.
        assert!(large > 900, "selected the large vehicle {large}/1000 times");
    }

    #[test]
    fn test_select_vehicle_single() {
        let warehouse = WarehouseVertex::new(0, vec![Vehicle::new(5)]);
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(warehouse.select_vehicle(&mut rng).capacity(), 5);
    }
}
