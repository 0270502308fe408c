use crate::modules::perception::Article;
use super::keywords::KeywordSet;

/// Outcome of one selection, with how many articles came from the keyword pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub articles: Vec<Article>,
    pub matched: usize,
}

impl Selection {
    pub fn filled(&self) -> usize {
        self.articles.len() - self.matched
    }
}

/// Picks at most `cap` articles, keyword matches first, then the earliest
/// remaining candidates. Source order is kept inside each pass.
pub fn select(candidates: &[Article], keywords: &KeywordSet, cap: usize) -> Vec<Article> {
    select_with_stats(candidates, keywords, cap).articles
}

pub fn select_with_stats(candidates: &[Article], keywords: &KeywordSet, cap: usize) -> Selection {
    let mut picked: Vec<Article> = Vec::with_capacity(cap.min(candidates.len()));

    // 第一轮：关键词相关性，命中即收
    for article in candidates {
        if picked.len() >= cap {
            break;
        }
        if keywords.matches_lowercase(&article.search_text()) && !picked.contains(article) {
            picked.push(article.clone());
        }
    }
    let matched = picked.len();

    // 第二轮：不够数时按原顺序（最新优先）补齐
    for article in candidates {
        if picked.len() >= cap {
            break;
        }
        if !picked.contains(article) {
            picked.push(article.clone());
        }
    }

    picked.truncate(cap);
    Selection { articles: picked, matched }
}
