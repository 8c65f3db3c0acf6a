//! Views over news posts.

use crate::models::NewsPost;

/// Posts visible to the public, in collection order.
pub fn published_news(news: &[NewsPost]) -> Vec<&NewsPost> {
    news.iter().filter(|post| post.published).collect()
}

/// The first `limit` published posts (home page teaser).
pub fn latest_news(news: &[NewsPost], limit: usize) -> Vec<&NewsPost> {
    news.iter().filter(|post| post.published).take(limit).collect()
}

/// Resolve a post link. Drafts are not addressable; on a slug collision the first
/// published match in collection order wins.
pub fn find_published_by_slug<'a>(news: &'a [NewsPost], slug: &str) -> Option<&'a NewsPost> {
    news.iter().find(|post| post.published && post.slug == slug)
}

/// Other published posts to show under an article.
pub fn related_news<'a>(news: &'a [NewsPost], post_id: &str, limit: usize) -> Vec<&'a NewsPost> {
    news.iter()
        .filter(|post| post.published && post.id != post_id)
        .take(limit)
        .collect()
}
