//! Stat rows and metrics for every ranked dashboard.

mod achievements;
mod activity;
mod ads;
mod authors;
mod books;
mod categories;
mod engagement;
mod goals;
mod papers;
mod subscribers;
mod universities;
mod users;

pub use achievements::{AchievementMetric, AchievementStats};
pub use activity::{ActivityMetric, ActivityStats};
pub use ads::{AdMetric, AdStats};
pub use authors::{AuthorMetric, AuthorStats};
pub use books::{BookMetric, BookStats};
pub use categories::{CategoryMetric, CategoryStats};
pub use engagement::{EngagementMetric, EngagementStats};
pub use goals::{GoalMetric, GoalStats};
pub use papers::{PaperMetric, PaperStats};
pub use subscribers::{SubscriberMetric, SubscriberStats};
pub use universities::{UniversityMetric, UniversityStats};
pub use users::{UserMetric, UserStats};
