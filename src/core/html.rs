//! Tag/keyword heuristics over fetched pages. One generic rule set for every
//! site; nothing here knows about any particular university's markup.

use scraper::{Html, Selector};
use url::Url;

/// An anchor href qualifies as a program candidate if its lowercased form
/// contains any of these.
const LINK_KEYWORDS: [&str; 3] = ["degree", "program", "course"];

/// Fields pulled out of one program page. `None` means the tag was absent,
/// not that anything failed.
#[derive(Debug, Clone, Default)]
pub struct ProgramPage {
    pub heading: Option<String>,
    pub breadcrumb_discipline: Option<String>,
}

/// Scans every anchor of a catalog homepage and returns candidate program
/// links: keyword-matched, deduplicated by exact string, first-seen order.
/// Relative hrefs are resolved against the catalog URL.
pub fn discover_program_links(body: &str, catalog_url: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let anchors = Selector::parse("a[href]").unwrap();

    let base = match Url::parse(catalog_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Catalog URL {} is not parseable: {}", catalog_url, e);
            return Vec::new();
        }
    };

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let lowered = href.to_lowercase();
        if !LINK_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            continue;
        }

        let resolved = if href.starts_with("http") {
            href.to_string()
        } else {
            match base.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::debug!("Skipping unresolvable href {}: {}", href, e);
                    continue;
                }
            }
        };

        if !links.contains(&resolved) {
            links.push(resolved);
        }
    }

    links
}

/// Extracts the best-effort fields from a program page body: the first `<h1>`
/// text and the second item of the first `<ul class="breadcrumb">` holding at
/// least two items.
pub fn parse_program_page(body: &str) -> ProgramPage {
    let document = Html::parse_document(body);
    let h1 = Selector::parse("h1").unwrap();
    let breadcrumb = Selector::parse("ul.breadcrumb").unwrap();
    let item = Selector::parse("li").unwrap();

    let heading = document
        .select(&h1)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    let breadcrumb_discipline = document.select(&breadcrumb).next().and_then(|list| {
        let items: Vec<String> = list.select(&item).map(element_text).collect();
        if items.len() >= 2 {
            Some(items[1].clone())
        } else {
            None
        }
    });

    ProgramPage {
        heading,
        breadcrumb_discipline,
    }
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_keyword_matching() {
        let body = r#"
            <html><body>
                <a href="https://example.edu/programs/physics">Physics</a>
                <a href="https://example.edu/about">About</a>
                <a href="https://example.edu/degrees/ba">BA</a>
                <a href="https://example.edu/courses/101">Intro</a>
            </body></html>
        "#;
        let links = discover_program_links(body, "https://example.edu/catalog/");
        assert_eq!(
            links,
            vec![
                "https://example.edu/programs/physics",
                "https://example.edu/degrees/ba",
                "https://example.edu/courses/101",
            ]
        );
    }

    #[test]
    fn test_discover_matches_uppercase_hrefs() {
        let body = r#"<a href="https://example.edu/PROGRAMS/math">Math</a>"#;
        let links = discover_program_links(body, "https://example.edu/");
        assert_eq!(links, vec!["https://example.edu/PROGRAMS/math"]);
    }

    #[test]
    fn test_discover_resolves_relative_hrefs() {
        let body = r#"
            <a href="/programs/cs">CS</a>
            <a href="degrees/ee">EE</a>
        "#;
        let links = discover_program_links(body, "https://example.edu/catalog/");
        assert_eq!(
            links,
            vec![
                "https://example.edu/programs/cs",
                "https://example.edu/catalog/degrees/ee",
            ]
        );
    }

    #[test]
    fn test_discover_deduplicates_preserving_order() {
        let body = r#"
            <a href="/programs/a">A</a>
            <a href="/programs/b">B</a>
            <a href="/programs/a">A again</a>
        "#;
        let links = discover_program_links(body, "https://example.edu");
        assert_eq!(
            links,
            vec![
                "https://example.edu/programs/a",
                "https://example.edu/programs/b",
            ]
        );
    }

    #[test]
    fn test_discover_no_matches() {
        let body = r#"<a href="/news">News</a><a href="/contact">Contact</a>"#;
        assert!(discover_program_links(body, "https://example.edu").is_empty());
    }

    #[test]
    fn test_parse_heading_and_breadcrumb() {
        let body = r#"
            <html><body>
                <ul class="breadcrumb"><li>Home</li><li>Engineering</li></ul>
                <h1>Master of Engineering</h1>
            </body></html>
        "#;
        let page = parse_program_page(body);
        assert_eq!(page.heading.as_deref(), Some("Master of Engineering"));
        assert_eq!(page.breadcrumb_discipline.as_deref(), Some("Engineering"));
    }

    #[test]
    fn test_parse_heading_without_breadcrumb() {
        let body = "<h1>Bachelor of Science in Physics</h1>";
        let page = parse_program_page(body);
        assert_eq!(
            page.heading.as_deref(),
            Some("Bachelor of Science in Physics")
        );
        assert_eq!(page.breadcrumb_discipline, None);
    }

    #[test]
    fn test_parse_breadcrumb_with_single_item() {
        let body = r#"<ul class="breadcrumb"><li>Home</li></ul><h1>Something</h1>"#;
        let page = parse_program_page(body);
        assert_eq!(page.breadcrumb_discipline, None);
    }

    #[test]
    fn test_parse_missing_heading() {
        let body = "<p>No heading here</p>";
        let page = parse_program_page(body);
        assert_eq!(page.heading, None);
    }

    #[test]
    fn test_parse_first_heading_wins() {
        let body = "<h1>First Title</h1><h1>Second Title</h1>";
        let page = parse_program_page(body);
        assert_eq!(page.heading.as_deref(), Some("First Title"));
    }

    #[test]
    fn test_parse_heading_text_is_trimmed() {
        let body = "<h1>\n    Master of Arts   \n</h1>";
        let page = parse_program_page(body);
        assert_eq!(page.heading.as_deref(), Some("Master of Arts"));
    }
}
