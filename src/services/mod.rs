pub mod fields;
pub mod providers;
pub mod suggestions;

pub use fields::{split_tokens, GENRE_DELIMITERS, PLATFORM_DELIMITERS};
pub use providers::{HttpRecommendationProvider, RecommendationOutcome, RecommendationProvider};
pub use suggestions::{suggest, SuggestionMatcher};
