//! Marketing page registry and HTML document shell.
//!
//! Each page has fixed metadata (title, description, social cards). The body
//! is a pre-rendered fragment supplied by the caller; `templates/page.html`
//! builds the surrounding document.

use askama::Template;

pub const SITE_NAME: &str = "Medici";
pub const DEFAULT_TITLE: &str = "Medici - Fund a Student's Future";
pub const DEFAULT_DESCRIPTION: &str = "A peer-to-peer platform where donors pick verified \
    students, choose any amount and fund their education securely and directly on the blockchain";
pub const DEFAULT_OG_IMAGE: &str = "/og-image.png";
pub const FAVICON: &str = "/favicon2.svg";

const BASE_KEYWORDS: &[&str] = &[
    "education funding",
    "student funding",
    "blockchain",
    "transparency",
    "direct funding",
    "peer-to-peer",
    "Medici",
];

/// Static metadata for one marketing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Fragment file stem, e.g. `about` for `pages/about.html`.
    pub slug: &'static str,
    pub path: &'static str,
    /// Short title; `None` uses [`DEFAULT_TITLE`] without the template.
    pub title: Option<&'static str>,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_image: &'static str,
}

pub const PAGES: &[PageMeta] = &[
    PageMeta {
        slug: "home",
        path: "/",
        title: None,
        description: DEFAULT_DESCRIPTION,
        keywords: &["donors", "students", "secure"],
        og_image: DEFAULT_OG_IMAGE,
    },
    PageMeta {
        slug: "about",
        path: "/about",
        title: Some("About Medici"),
        description: "Learn how Medici is revolutionizing education funding through \
            blockchain technology. Direct, transparent, and efficient support for verified \
            students worldwide.",
        keywords: &[],
        og_image: DEFAULT_OG_IMAGE,
    },
    PageMeta {
        slug: "careers",
        path: "/careers",
        title: Some("Careers"),
        description: "Join the team building direct, transparent education funding.",
        keywords: &["careers", "jobs"],
        og_image: DEFAULT_OG_IMAGE,
    },
    PageMeta {
        slug: "campus-ambassador",
        path: "/careers/campus-ambassador",
        title: Some("Campus Ambassador"),
        description: "Represent Medici on your campus and help students find direct funding.",
        keywords: &["campus ambassador", "student jobs"],
        og_image: DEFAULT_OG_IMAGE,
    },
    PageMeta {
        slug: "donate",
        path: "/donate",
        title: Some("Get Early Access"),
        description: "Join Medici's early access list to be among the first donors to \
            support verified students directly and transparently.",
        keywords: &["early access"],
        og_image: "/og-image-notify.png",
    },
    PageMeta {
        slug: "student",
        path: "/student",
        title: Some("Student Application"),
        description: "Apply for student funding through Medici. Get direct, transparent \
            funding for your education from verified donors.",
        keywords: &["student application"],
        og_image: "/og-image-student.png",
    },
    PageMeta {
        slug: "privacypolicy",
        path: "/privacypolicy",
        title: Some("Privacy Policy"),
        description: "How Medici collects, uses and protects your personal data.",
        keywords: &["privacy"],
        og_image: DEFAULT_OG_IMAGE,
    },
];

/// Look up a page by its request path.
pub fn find_page(path: &str) -> Option<&'static PageMeta> {
    PAGES.iter().find(|p| p.path == path)
}

impl PageMeta {
    /// Full `<title>` text, applying the `"%s | Medici"` template.
    pub fn document_title(&self) -> String {
        match self.title {
            Some(title) => format!("{title} | {SITE_NAME}"),
            None => DEFAULT_TITLE.to_string(),
        }
    }

    fn keyword_list(&self) -> String {
        let mut all: Vec<&str> = BASE_KEYWORDS.to_vec();
        for k in self.keywords {
            if !all.contains(k) {
                all.push(k);
            }
        }
        all.join(", ")
    }
}

/// Settings that vary per deployment.
#[derive(Debug, Clone)]
pub struct ShellOptions<'a> {
    /// Absolute site URL used for canonical and Open Graph links.
    pub site_url: &'a str,
    /// Google Analytics measurement id; no tag is emitted when `None`.
    pub analytics_id: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: String,
    description: &'a str,
    keywords: String,
    url: String,
    image: String,
    favicon: &'a str,
    site_name: &'a str,
    analytics_id: Option<&'a str>,
    /// Trusted markup, inserted unescaped.
    body: &'a str,
}

fn absolute(site_url: &str, path: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), path)
}

/// Render the full HTML document for `page` around `body`.
///
/// Metadata is HTML-escaped; `body` is inserted verbatim.
pub fn render_document(
    page: &PageMeta,
    body: &str,
    opts: &ShellOptions<'_>,
) -> Result<String, askama::Error> {
    PageTemplate {
        title: page.document_title(),
        description: page.description,
        keywords: page.keyword_list(),
        url: absolute(opts.site_url, page.path),
        image: absolute(opts.site_url, page.og_image),
        favicon: FAVICON,
        site_name: SITE_NAME,
        analytics_id: opts.analytics_id,
        body,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: ShellOptions<'static> = ShellOptions {
        site_url: "https://medici.ac/",
        analytics_id: None,
    };

    #[test]
    fn every_page_path_is_unique() {
        for (i, a) in PAGES.iter().enumerate() {
            for b in &PAGES[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn title_template() {
        assert_eq!(find_page("/").unwrap().document_title(), DEFAULT_TITLE);
        assert_eq!(
            find_page("/about").unwrap().document_title(),
            "About Medici | Medici"
        );
    }

    #[test]
    fn unknown_path_has_no_page() {
        assert!(find_page("/nope").is_none());
    }

    #[test]
    fn metadata_is_escaped_but_body_is_not() {
        let page = PageMeta {
            title: Some("Tom & <Jerry>"),
            description: "say \"hi\"",
            ..*find_page("/about").unwrap()
        };
        let html = render_document(&page, "<p>kept</p>", &OPTS).unwrap();

        assert!(html.contains("<title>Tom &amp; &lt;Jerry&gt; | Medici</title>"));
        assert!(html.contains("content=\"say &quot;hi&quot;\""));
        assert!(html.contains("<p>kept</p>"));
    }

    #[test]
    fn document_contains_metadata_and_body() {
        let page = find_page("/student").unwrap();
        let html = render_document(page, "<h1>Apply</h1>", &OPTS).unwrap();

        assert!(html.contains("<title>Student Application | Medici</title>"));
        assert!(html.contains("content=\"https://medici.ac/og-image-student.png\""));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://medici.ac/student\">"));
        assert!(html.contains("<h1>Apply</h1>"));
        assert!(!html.contains("googletagmanager"));
    }

    #[test]
    fn analytics_tag_is_optional() {
        let opts = ShellOptions {
            analytics_id: Some("G-TEST123"),
            ..OPTS
        };
        let html = render_document(find_page("/").unwrap(), "", &opts).unwrap();
        assert!(html.contains("gtag/js?id=G-TEST123"));
        assert!(html.contains("gtag('config', 'G-TEST123')"));
    }

    #[test]
    fn keywords_merge_without_duplicates() {
        let page = PageMeta {
            keywords: &["blockchain", "extra"],
            ..*find_page("/").unwrap()
        };
        let list = page.keyword_list();
        assert_eq!(list.matches("blockchain").count(), 1);
        assert!(list.ends_with("extra"));
    }
}
