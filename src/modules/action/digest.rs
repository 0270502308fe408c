use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{DigestError, Result};
use crate::modules::perception::{Article, NewsItem};

/// Writes the selected articles as a flat JSON array.
pub struct DigestWriter {
    path: PathBuf,
}

impl DigestWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every article must carry title, url, source name and date.
    pub fn project(articles: &[Article]) -> Result<Vec<NewsItem>> {
        articles
            .iter()
            .enumerate()
            .map(|(i, a)| NewsItem::from_article(a, i))
            .collect()
    }

    /// 先完整序列化再落盘，最后 rename 替换；失败时旧文件保持不变
    pub fn write(&self, items: &[NewsItem]) -> Result<()> {
        let json = serde_json::to_vec(items).map_err(DigestError::Serialize)?;

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        // [修改] 每次运行用独立的临时文件，并发运行互不覆盖；失败时 drop 自动删除
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!("💾 Wrote {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}
