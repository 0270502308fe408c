use std::fmt;
use super::structs::NewsItem;

impl fmt::Display for NewsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.source, self.title, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line() {
        let item = NewsItem {
            title: "Fed holds rates".into(),
            url: "https://example.com/fed".into(),
            source: "Reuters".into(),
            date: "2026-10-16T12:00:00Z".into(),
        };
        assert_eq!(item.to_string(), "[Reuters] Fed holds rates (2026-10-16T12:00:00Z)");
    }
}
