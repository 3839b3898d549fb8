use common::types::Article;

/// Articles whose description, ville or status contains `search`, ignoring case.
/// An empty search keeps everything.
pub fn filter_articles<'a>(articles: &'a [Article], search: &str) -> Vec<&'a Article> {
    let needle = search.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.description.to_lowercase().contains(&needle)
                || a.ville.to_lowercase().contains(&needle)
                || a.status.to_lowercase().contains(&needle)
        })
        .collect()
}
