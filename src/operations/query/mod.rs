mod convex_hull;
mod extended_hull;
mod find_cycles;
mod length;
mod min_bounding_rect;

pub use convex_hull::{ConvexHull, Hull};
pub use extended_hull::ExtendedHull;
pub use find_cycles::FindCycles;
pub use length::{Length, Perimeter};
pub use min_bounding_rect::{BoundingRect, MinBoundingRect};
