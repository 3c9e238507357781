pub mod card;
pub mod view;

pub use card::{Badge, Card, CardId, Category, Rating};
pub use view::{BadgeView, CardViewModel, EmptyState, LinkIcon, LinkView, RenderPlan};
