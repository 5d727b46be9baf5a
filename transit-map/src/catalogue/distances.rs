//! Declared road distances between stops.
//!
//! Distances are directed: the road from A to B can be longer than the road
//! back. Declaring A→B also fills in B→A, but only if B→A has not been
//! declared yet, so an explicit reverse declaration always wins regardless
//! of the order the two arrive in.

use std::collections::HashMap;

use crate::domain::StopId;

/// Directed distance table keyed by stop pairs.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    /// Map from (from, to) to distance in meters.
    distances: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the distance from `from` to `to`.
    ///
    /// Overwrites any previous `from → to` value. The reverse direction is
    /// filled with the same value only if it is still absent.
    pub fn declare(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
        self.distances.entry((to, from)).or_insert(meters);
    }

    /// Get the declared distance, if any.
    pub fn get(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.get(&(from, to)).copied()
    }

    /// Get the declared distance, treating undeclared pairs as 0.
    pub fn get_or_zero(&self, from: StopId, to: StopId) -> u32 {
        self.get(from, to).unwrap_or(0)
    }

    /// Returns the number of directed entries, auto-filled ones included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A lone declaration is readable in both directions.
        #[test]
        fn single_declaration_is_symmetric(a in 0usize..50, b in 0usize..50, d in 0u32..100_000) {
            let mut table = DistanceTable::new();
            table.declare(StopId(a), StopId(b), d);
            prop_assert_eq!(table.get(StopId(a), StopId(b)), Some(d));
            prop_assert_eq!(table.get(StopId(b), StopId(a)), Some(d));
        }

        /// Once both directions are declared, each keeps its own value.
        #[test]
        fn both_directions_declared(
            a in 0usize..50,
            b in 0usize..50,
            forward in 0u32..100_000,
            backward in 0u32..100_000,
        ) {
            prop_assume!(a != b);
            let mut table = DistanceTable::new();
            table.declare(StopId(a), StopId(b), forward);
            table.declare(StopId(b), StopId(a), backward);
            prop_assert_eq!(table.get(StopId(a), StopId(b)), Some(forward));
            prop_assert_eq!(table.get(StopId(b), StopId(a)), Some(backward));
        }
    }
}
