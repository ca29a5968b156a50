pub mod aggregate;
pub mod extract;
pub mod overall;
pub mod profile;
pub mod rating;
pub mod record;

pub use aggregate::{aggregate, chart_points, FighterTotal, FilterOptions};
pub use overall::{OverallRating, RatingSuite};
pub use profile::FighterProfile;
pub use record::{FighterRecord, WeightClassAverage};
