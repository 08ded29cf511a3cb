//! Signal extraction from a fetched HTML document

use crate::audit::error::AuditError;
use crate::audit::{MISSING, PageSignals};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Elements whose content never counts as visible words
const NON_CONTENT_SELECTOR: &str = "script, style, noscript";

fn selector(css: &str) -> Result<Selector, AuditError> {
    Selector::parse(css)
        .map_err(|e| AuditError::HtmlParse(format!("Failed to parse selector '{}': {}", css, e)))
}

fn first<'a>(document: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>, AuditError> {
    Ok(document.select(&selector(css)?).next())
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract the on-page signals from an HTML document
///
/// Every lookup degrades to its sentinel or zero value when the element is
/// absent; the only error is a selector that fails to compile.
///
/// # Arguments
///
/// * `html` - The page body as returned by the server
///
/// # Returns
///
/// The extracted signals
pub fn extract_signals(html: &str) -> Result<PageSignals, AuditError> {
    let mut document = Html::parse_document(html);

    let title = first(&document, "title")?
        .map(trimmed_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| MISSING.to_string());

    let meta_description = first(&document, r#"meta[name="description"]"#)?
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|| MISSING.to_string());

    let h1 = first(&document, "h1")?
        .map(trimmed_text)
        .unwrap_or_else(|| MISSING.to_string());

    let img_selector = selector("img")?;
    let (total_images, image_alt_missing) =
        document.select(&img_selector).fold((0, 0), |(total, missing), img| {
            let has_alt = img.value().attr("alt").is_some_and(|alt| !alt.is_empty());
            (total + 1, if has_alt { missing } else { missing + 1 })
        });

    let has_canonical = first(&document, r#"link[rel~="canonical"]"#)?
        .and_then(|element| element.value().attr("href"))
        .is_some_and(|href| !href.is_empty());

    let word_count = count_words(&mut document)?;

    debug!(total_images, image_alt_missing, word_count, has_canonical, "Extracted page signals");

    Ok(PageSignals {
        title,
        meta_description,
        h1,
        total_images,
        image_alt_missing,
        word_count,
        has_canonical,
    })
}

/// Count whitespace-separated words in the document body.
///
/// Script, style and noscript subtrees are detached from the parsed tree
/// first, so this consumes the document for any later text queries.
fn count_words(document: &mut Html) -> Result<usize, AuditError> {
    let non_content = selector(NON_CONTENT_SELECTOR)?;
    let detached: Vec<_> = document.select(&non_content).map(|el| el.id()).collect();
    for id in detached {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let body_selector = selector("body")?;
    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let text = root.text().collect::<Vec<_>>().join(" ");
    Ok(text.split_whitespace().count())
}
