/// Finance terms and ETF tickers used for relevance matching.
pub const FINANCE_KEYWORDS: &[&str] = &[
    // indices and instruments
    "s&p 500", "sp500", "spx", "nasdaq", "dow jones", "djia", "russell 2000", "ftse 100",
    "nikkei 225", "dax", "cac 40", "tsx", "hang seng", "shanghai composite",
    "treasury yield", "bond yield", "yield curve", "inverted yield curve", "credit spread",
    "high yield bond", "investment grade bond", "junk bond", "corporate bond", "sovereign bond",
    "etf", "exchange traded fund", "mutual fund", "hedge fund", "private equity",
    "venture capital", "ipo", "spac", "dividend", "share buyback", "stock split",
    "options trading", "futures contract", "derivatives", "structured product",
    "volatility index", "vix", "earnings report", "quarterly results", "analyst upgrade",
    "analyst downgrade",
    // policy
    "monetary policy", "rate hike", "rate cut", "interest rate decision", "federal reserve",
    "ecb", "bank of england", "boj", "pboc", "central bank meeting",
    "quantitative easing", "tapering", "balance sheet", "repo market", "liquidity crunch",
    "systemic risk", "stress test", "capital requirement", "leverage ratio",
    // macro
    "inflation data", "cpi", "ppi", "gdp growth", "unemployment rate", "recession risk",
    "market correction", "bull market", "bear market", "market volatility",
    "asset allocation", "portfolio rebalancing", "risk management", "factor investing",
    "smart beta", "esg investing", "sustainable finance", "green bond",
    // crypto
    "cryptocurrency", "bitcoin", "ethereum", "blockchain", "defi", "stablecoin", "cbdc",
    // tickers
    "spy", "qqq", "dia", "iwm", "efa", "eem", "vnq", "lqd", "hyg", "tlt", "shy", "ief",
    "agg", "bnd", "mub", "tip", "gld", "slv", "uso", "dba", "uup", "fxe", "fxy", "fxb",
];

/// Case-insensitive keyword set.
///
/// Matching is by raw substring, not by token: `"spy"` matches inside
/// `"spyware"`. Keywords keep their first-seen order so matching is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(keywords.len());
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if kw.is_empty() || normalized.contains(&kw) {
                continue;
            }
            normalized.push(kw);
        }
        Self { keywords: normalized }
    }

    pub fn finance() -> Self {
        Self::new(FINANCE_KEYWORDS)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Lowercases `text` and checks it against every keyword.
    pub fn matches(&self, text: &str) -> bool {
        self.matches_lowercase(&text.to_lowercase())
    }

    /// Same as [`matches`](Self::matches) for text that is already lowercase.
    pub fn matches_lowercase(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(kw.as_str()))
    }
}
