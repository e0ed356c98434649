use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// Text content of every `<li>` element, in document order.
///
/// Nested markup inside an item is flattened to its descendant text, so
/// `<li>algo_<b>teamA</b> ...</li>` yields the same string as unstyled
/// markup.
pub fn list_item_texts(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("li").map_err(|e| anyhow!("Invalid li selector: {e}"))?;

    Ok(document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect())
}
