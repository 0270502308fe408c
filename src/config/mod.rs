pub mod news_profile;

pub use news_profile::NewsProfile;
