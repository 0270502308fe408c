pub mod structs;
pub mod text_serializer;
pub mod news;

pub use structs::{Article, ArticleSource, NewsApiResponse, NewsItem};
pub use news::NewsSentinel;
