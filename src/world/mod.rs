// world/ - Terrain map
//
// Read-only after load. Queries are pure wrap-and-index lookups:
// no state, no allocation.

mod terrain;

pub use terrain::*;
