//! In-memory `<head>` model implementing the document sink.

use askama::Template;

use crate::application::services::DocumentSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaElement {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub rel: String,
    pub href: String,
}

/// The page head as the settings provider sees it: a title, named meta tags
/// and link elements.
///
/// Starts like the site's HTML template: an empty title and an empty
/// `description` meta tag. Meta tags are only ever updated, never created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadDocument {
    title: String,
    metas: Vec<MetaElement>,
    links: Vec<LinkElement>,
}

impl Default for HeadDocument {
    fn default() -> Self {
        Self {
            title: String::new(),
            metas: vec![MetaElement {
                name: "description".into(),
                content: String::new(),
            }],
            links: Vec::new(),
        }
    }
}

impl HeadDocument {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// A head without any meta tags.
    pub fn bare() -> Self {
        Self {
            title: String::new(),
            metas: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|meta| meta.name == name)
            .map(|meta| meta.content.as_str())
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta("description")
    }

    pub fn icon_links(&self) -> impl Iterator<Item = &LinkElement> {
        self.links.iter().filter(|link| link.rel == "icon")
    }

    pub fn favicon_href(&self) -> Option<&str> {
        self.icon_links().next().map(|link| link.href.as_str())
    }

    /// Render the head as an HTML fragment. Values are HTML-escaped.
    pub fn render(&self) -> Result<String, askama::Error> {
        HeadTemplate {
            title: &self.title,
            metas: &self.metas,
            links: &self.links,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "head.html")]
struct HeadTemplate<'a> {
    title: &'a str,
    metas: &'a [MetaElement],
    links: &'a [LinkElement],
}

impl DocumentSink for HeadDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta_description(&mut self, description: &str) {
        if let Some(meta) = self.metas.iter_mut().find(|meta| meta.name == "description") {
            meta.content = description.to_string();
        }
    }

    fn set_favicon(&mut self, href: &str) {
        match self.links.iter_mut().find(|link| link.rel == "icon") {
            Some(link) => link.href = href.to_string(),
            None => self.links.push(LinkElement {
                rel: "icon".into(),
                href: href.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_link_is_created_once_then_updated() {
        let mut head = HeadDocument::default();
        head.set_favicon("/a.ico");
        head.set_favicon("/b.ico");

        assert_eq!(head.icon_links().count(), 1);
        assert_eq!(head.favicon_href(), Some("/b.ico"));
    }

    #[test]
    fn missing_meta_tag_is_not_created() {
        let mut head = HeadDocument::bare();
        head.set_meta_description("ignored");
        assert_eq!(head.meta_description(), None);
    }

    #[test]
    fn render_escapes_attribute_values() {
        let mut head = HeadDocument::default();
        head.set_title("R&D <Advisory>");
        head.set_meta_description("say \"hi\" or 'bye'");

        let html = head.render().unwrap();
        assert!(html.contains("<title>R&amp;D &lt;Advisory&gt;</title>"));
        assert!(!html.contains("\"hi\""));
        assert!(!html.contains("'bye'"));
    }

    #[test]
    fn render_lists_meta_then_links() {
        let mut head = HeadDocument::with_title("HD MONKS");
        head.set_meta_description("Business Solutions");
        head.set_favicon("https://cdn.example.com/fav.png");

        let html = head.render().unwrap();
        let meta = html
            .find("<meta name=\"description\" content=\"Business Solutions\">")
            .unwrap();
        let link = html
            .find("<link rel=\"icon\" href=\"https://cdn.example.com/fav.png\">")
            .unwrap();
        assert!(html.starts_with("<head>"));
        assert!(meta < link);
        assert!(html.trim_end().ends_with("</head>"));
    }
}
