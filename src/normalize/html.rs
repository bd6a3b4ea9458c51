//! HTML shaping: visible-text extraction and structural parsing of the two
//! external page layouts the gateway understands (search result pages and
//! the agenda listing).

use crate::types::{EventRecord, Result, SearchHit, ToolError};
use scraper::{ElementRef, Html, Node, Selector};

/// Extract the visible text of an HTML document as trimmed, non-empty lines.
///
/// Content inside `<script>`, `<style>` and `<noscript>` is not visible and
/// never appears in the output. Block boundaries become line breaks.
pub fn visible_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut raw = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                matches!(
                    ancestor.value(),
                    Node::Element(el) if matches!(el.name(), "script" | "style" | "noscript")
                )
            });
            if hidden {
                continue;
            }
            raw.push_str(text);
            raw.push('\n');
        }
    }

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Visible text capped to the first `max_lines` lines. Truncation happens
/// after line splitting, never mid-line.
pub fn text_preview(html: &str, max_lines: usize) -> String {
    let mut lines = visible_lines(html);
    lines.truncate(max_lines);
    lines.join("\n")
}

/// Parse a search-engine result page into hits, keeping at most `max_hits`
/// in page order. Result anchors carry the `result__a` class; a hit missing
/// its title or target is skipped rather than failing the page.
pub fn parse_search_results(html: &str, max_hits: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let anchor = selector("a.result__a");

    let mut hits = Vec::new();
    for element in document.select(&anchor) {
        if hits.len() == max_hits {
            break;
        }
        let title = text_of(&element);
        let url = element
            .value()
            .attr("href")
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if title.is_empty() || url.is_empty() {
            tracing::debug!("skipping search hit with missing title or url");
            continue;
        }
        hits.push(SearchHit { title, url });
    }
    hits
}

struct AgendaSelectors {
    wrapper: Selector,
    title_link: Selector,
    datetime: Selector,
    date: Selector,
    time: Selector,
    venue: Selector,
}

impl AgendaSelectors {
    fn new() -> Self {
        Self {
            wrapper: selector(".tribe-events-calendar-list__event-wrapper"),
            title_link: selector(".tribe-events-calendar-list__event-title-link"),
            datetime: selector(".tribe-events-calendar-list__event-datetime"),
            date: selector(".dateshed"),
            time: selector(".timeshed"),
            venue: selector(".tribe-events-calendar-list__event-venue"),
        }
    }
}

/// Parse the agenda listing page into event records.
///
/// A missing events container means the page layout changed and the scraper
/// is broken against it — reported as a parse error, never as an empty
/// success. An empty container is a valid "zero events listed" result.
/// Entries missing a required sub-field are logged and skipped.
pub fn parse_agenda(html: &str) -> Result<Vec<EventRecord>> {
    let document = Html::parse_document(html);
    let container_selector = selector(".tribe-events-calendar-list");
    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ToolError::ParseError("events container not found".to_string()))?;

    let selectors = AgendaSelectors::new();
    let mut events = Vec::new();
    for entry in container.select(&selectors.wrapper) {
        match extract_event(&entry, &selectors) {
            Some(event) => events.push(event),
            None => tracing::warn!("skipping agenda entry with missing fields"),
        }
    }
    Ok(events)
}

fn extract_event(entry: &ElementRef<'_>, selectors: &AgendaSelectors) -> Option<EventRecord> {
    let title_link = entry.select(&selectors.title_link).next()?;
    let title = text_of(&title_link);
    let url = title_link.value().attr("href")?.trim().to_string();

    let datetime = entry.select(&selectors.datetime).next()?;
    let date = datetime.select(&selectors.date).next().map(|e| text_of(&e))?;
    let time = datetime.select(&selectors.time).next().map(|e| text_of(&e))?;
    let location = entry.select(&selectors.venue).next().map(|e| text_of(&e))?;

    if title.is_empty() || url.is_empty() || date.is_empty() || time.is_empty() || location.is_empty()
    {
        return None;
    }

    Some(EventRecord {
        title,
        url,
        date,
        time,
        location,
    })
}

fn text_of(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_and_style_content_is_invisible() {
        let html = r#"<html><head><style>body { color: red; }</style>
            <script>var secret = "leaked";</script></head>
            <body><p>Visible paragraph</p><noscript>enable js</noscript></body></html>"#;
        let lines = visible_lines(html);
        assert_eq!(lines, vec!["Visible paragraph"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let html = "<body><p>one</p><p>   </p><div>\n\n</div><p>two</p></body>";
        assert_eq!(visible_lines(html), vec!["one", "two"]);
    }

    #[test]
    fn test_preview_truncates_after_line_splitting() {
        let body: String = (0..80).map(|i| format!("<p>line {}</p>", i)).collect();
        let preview = text_preview(&body, 60);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 60);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[59], "line 59");
    }

    #[test]
    fn test_search_results_capped_and_ordered() {
        let html: String = (0..5)
            .map(|i| {
                format!(
                    r#"<div class="result"><a class="result__a" href="https://example.org/{i}">Result {i}</a></div>"#
                )
            })
            .collect();
        let hits = parse_search_results(&html, 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "Result 0");
        assert_eq!(hits[2].url, "https://example.org/2");
    }

    #[test]
    fn test_search_hit_without_href_is_skipped() {
        let html = r#"
            <a class="result__a">No target</a>
            <a class="result__a" href="https://example.org/ok">Ok</a>"#;
        let hits = parse_search_results(html, 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://example.org/ok");
    }

    #[test]
    fn test_agenda_without_container_is_parse_error() {
        let err = parse_agenda("<html><body><p>redesigned page</p></body></html>").unwrap_err();
        assert_eq!(err.kind(), "parse_error");
        assert_eq!(err.message(), "events container not found");
    }

    #[test]
    fn test_empty_container_yields_zero_events() {
        let html = r#"<div class="tribe-events-calendar-list"></div>"#;
        let events = parse_agenda(html).unwrap();
        assert!(events.is_empty());
    }
}
