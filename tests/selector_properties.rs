use trending_news::{select, Article, ArticleSource, KeywordSet};

fn article(n: usize, title: &str) -> Article {
    Article {
        source: ArticleSource { id: Some(format!("src-{}", n)), name: Some("Newswire".into()) },
        title: Some(title.to_string()),
        description: None,
        url: Some(format!("https://news.test/{}", n)),
        published_at: Some(format!("2026-10-{:02}T09:00:00Z", 28 - n)),
        ..Article::default()
    }
}

fn plain(n: usize) -> Article {
    article(n, &format!("Local story {}", n))
}

fn fed(n: usize) -> Article {
    article(n, &format!("Federal Reserve weighs its next move, part {}", n))
}

/// 1-based positions, matching articles at the given slots.
fn feed(len: usize, matching: &[usize]) -> Vec<Article> {
    (1..=len)
        .map(|n| if matching.contains(&n) { fed(n) } else { plain(n) })
        .collect()
}

fn position(candidates: &[Article], a: &Article) -> usize {
    candidates.iter().position(|c| c == a).expect("selected article not in candidates")
}

#[test]
fn federal_reserve_scenario() {
    let candidates = feed(10, &[2, 5, 9]);
    let picked = select(&candidates, &KeywordSet::finance(), 7);

    let expected: Vec<Article> = [2, 5, 9, 1, 3, 4, 6].iter().map(|&p| candidates[p - 1].clone()).collect();
    assert_eq!(picked, expected);
}

#[test]
fn short_feed_without_matches_is_returned_whole() {
    let candidates = feed(4, &[]);
    let picked = select(&candidates, &KeywordSet::finance(), 7);
    assert_eq!(picked, candidates);
}

#[test]
fn no_matches_returns_the_head_of_the_feed() {
    let candidates = feed(12, &[]);
    let picked = select(&candidates, &KeywordSet::finance(), 7);
    assert_eq!(picked, candidates[..7].to_vec());
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(select(&[], &KeywordSet::finance(), 7).is_empty());
}

#[test]
fn exact_duplicates_appear_once() {
    let mut candidates = feed(3, &[]);
    candidates.insert(1, candidates[0].clone());
    let picked = select(&candidates, &KeywordSet::finance(), 7);

    assert_eq!(picked.len(), 3);
    assert_eq!(picked.iter().filter(|a| **a == candidates[0]).count(), 1);
}

#[test]
fn near_duplicates_are_distinct() {
    let original = fed(1);
    let syndicated = Article {
        source: ArticleSource { id: None, name: Some("Other Outlet".into()) },
        published_at: Some("2026-10-27T10:00:00Z".into()),
        ..original.clone()
    };
    let picked = select(&[original.clone(), syndicated.clone()], &KeywordSet::finance(), 7);
    assert_eq!(picked, vec![original, syndicated]);
}

#[test]
fn keyword_matching_ignores_case_and_token_boundaries() {
    let candidates = vec![plain(1), article(2, "New SPYWARE strain found")];
    let picked = select(&candidates, &KeywordSet::finance(), 1);
    assert_eq!(picked, vec![candidates[1].clone()]);
}

#[test]
fn cap_subset_and_order_hold_across_shapes() {
    let shapes: &[(usize, &[usize])] = &[
        (0, &[]),
        (1, &[1]),
        (5, &[1, 2, 3, 4, 5]),
        (10, &[2, 5, 9]),
        (15, &[15]),
        (20, &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19]),
    ];
    let keywords = KeywordSet::finance();

    for &(len, matching) in shapes {
        let candidates = feed(len, matching);
        for cap in 0..=12 {
            let picked = select(&candidates, &keywords, cap);

            assert!(picked.len() <= cap, "cap {} exceeded for len {}", cap, len);
            assert_eq!(picked.len(), cap.min(len));

            let (hits, rest): (Vec<&Article>, Vec<&Article>) =
                picked.iter().partition(|a| keywords.matches_lowercase(&a.search_text()));

            // matches come first
            assert_eq!(&picked[..hits.len()], hits.iter().map(|a| (*a).clone()).collect::<Vec<_>>().as_slice());

            for group in [&hits, &rest] {
                let positions: Vec<usize> = group.iter().map(|a| position(&candidates, a)).collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken: {:?}", positions);
            }
        }
    }
}
