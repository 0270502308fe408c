use tracing::{error, info, warn};

use crate::config::NewsProfile;
use crate::error::Result;
use crate::modules::action::DigestWriter;
use crate::modules::perception::{NewsItem, NewsSentinel};
use crate::modules::selection::{select_with_stats, KeywordSet};

/// 单次运行：抓取 → 筛选 → 写盘
pub struct NewsDigest {
    sentinel: NewsSentinel,
    keywords: KeywordSet,
    max_articles: usize,
    writer: DigestWriter,
}

impl NewsDigest {
    pub fn new(sentinel: NewsSentinel, profile: &NewsProfile) -> Self {
        let keywords = profile.keyword_set();
        if keywords.is_empty() {
            warn!("⚠️ Keyword list is empty, digest will be filled by recency only");
        } else {
            info!("🔑 {} keywords loaded", keywords.len());
        }
        Self {
            sentinel,
            keywords,
            max_articles: profile.max_articles,
            writer: DigestWriter::new(profile.output_path.clone()),
        }
    }

    /// Returns `true` when the digest was replaced. Any failure is logged and
    /// the previous file is left alone.
    pub async fn run(&self) -> bool {
        match self.try_run().await {
            Ok(items) => {
                info!("✅ Successfully wrote {} ({} articles)", self.writer.path().display(), items.len());
                true
            }
            Err(e) => {
                error!("❌ Error updating news: {}", e);
                false
            }
        }
    }

    pub async fn try_run(&self) -> Result<Vec<NewsItem>> {
        let candidates = self.sentinel.fetch_candidates().await?;

        let selection = select_with_stats(&candidates, &self.keywords, self.max_articles);
        info!(
            "🔍 Selected {} of {} candidates ({} keyword matches, {} filled)",
            selection.articles.len(),
            candidates.len(),
            selection.matched,
            selection.filled()
        );

        let items = DigestWriter::project(&selection.articles)?;
        for item in &items {
            info!("  • {}", item);
        }

        self.writer.write(&items)?;
        Ok(items)
    }
}
