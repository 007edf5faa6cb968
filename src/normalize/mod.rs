//! Text normalization
//!
//! Counts and fixes four kinds of issues in a post:
//! typographic quotes and ellipses, absolute links to the production blog,
//! `Github` spelled with a lowercase h, and `powershell`/`Powershell`.

use lazy_static::lazy_static;
use regex::Regex;
use std::convert::Infallible;

use crate::error::Error;

/// Host used when no `blog_host` is configured
pub const DEFAULT_BLOG_HOST: &str = "developer.okta.com";

/// Typographic characters and their ASCII replacements
const CURLY_REPLACEMENTS: [(char, &str); 5] = [
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2026}', "..."),
];

lazy_static! {
    static ref CURLY_RE: Regex =
        Regex::new("[\u{2018}\u{2019}\u{201C}\u{201D}\u{2026}]").expect("valid pattern");
    static ref GITHUB_RE: Regex = Regex::new("Github").expect("valid pattern");
    static ref POWERSHELL_RE: Regex = Regex::new("[Pp]owershell").expect("valid pattern");
}

/// Issue counts measured on the original text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub curly: usize,
    pub absolute_urls: usize,
    pub github_case: usize,
    pub powershell_case: usize,
}

impl Counts {
    /// Summary printed before asking to fix. The PowerShell count is not part of it.
    pub fn summary(&self) -> String {
        format!(
            "Found {} curly quotes, {} absolute blog URLs, and {} 'GitHub' case issues.",
            self.curly, self.absolute_urls, self.github_case
        )
    }
}

/// One substitution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fix {
    CurlyQuotes,
    AbsoluteUrls,
    GithubCase,
    PowershellCase,
}

impl Fix {
    /// All fixes, in the order they are applied
    pub const ALL: [Fix; 4] = [
        Fix::CurlyQuotes,
        Fix::AbsoluteUrls,
        Fix::GithubCase,
        Fix::PowershellCase,
    ];

    /// Apply this fix to `text`
    pub fn apply(self, normalizer: &Normalizer, text: &str) -> String {
        match self {
            Fix::CurlyQuotes => replace_curly(text),
            Fix::AbsoluteUrls => normalizer.relativize_urls(text),
            Fix::GithubCase => GITHUB_RE.replace_all(text, "GitHub").into_owned(),
            Fix::PowershellCase => POWERSHELL_RE.replace_all(text, "PowerShell").into_owned(),
        }
    }

    /// Report line for this fix, using the counts taken before any fix ran
    pub fn report(self, counts: &Counts) -> String {
        match self {
            Fix::CurlyQuotes => format!("Replaced {} characters", counts.curly),
            Fix::AbsoluteUrls => format!(
                "Replaced {} instances of absolute blog URLs",
                counts.absolute_urls
            ),
            Fix::GithubCase => format!(
                "Replaced {} instances of 'Github' to 'GitHub'",
                counts.github_case
            ),
            Fix::PowershellCase => format!(
                "Fixed {} PowerShell capitalization errors",
                counts.powershell_case
            ),
        }
    }
}

/// Counts and fixes issues for one blog host
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Counting only recognizes `https` links
    count_url_re: Regex,
    /// Rewriting recognizes both `http` and `https` links
    replace_url_re: Regex,
}

impl Normalizer {
    /// Build a normalizer for absolute links to `blog_host`
    pub fn new(blog_host: &str) -> Result<Self, Error> {
        let host = regex::escape(blog_host);
        Ok(Self {
            count_url_re: Regex::new(&format!(r"\(https://{}/blog/(.+)\)", host))?,
            replace_url_re: Regex::new(&format!(r"\(https?://{}/blog/(.+)\)", host))?,
        })
    }

    /// Measure all four issue kinds on the same unmodified text
    pub fn count(&self, text: &str) -> Counts {
        Counts {
            curly: CURLY_RE.find_iter(text).count(),
            absolute_urls: self.count_url_re.find_iter(text).count(),
            github_case: GITHUB_RE.find_iter(text).count(),
            powershell_case: POWERSHELL_RE.find_iter(text).count(),
        }
    }

    /// Rewrite `(https://<host>/blog/<tail>)` as `(/blog/<tail>)`
    ///
    /// The tail is greedy up to the last `)` on the line. Plain `http` links
    /// are rewritten too, although they are not counted.
    pub fn relativize_urls(&self, text: &str) -> String {
        self.replace_url_re
            .replace_all(text, "(/blog/${1})")
            .into_owned()
    }

    /// Run every fix in order, calling `after` once each fix has run
    pub fn apply_each<E, F>(&self, text: &str, mut after: F) -> Result<String, E>
    where
        F: FnMut(Fix) -> Result<(), E>,
    {
        let mut contents = text.to_string();
        for fix in Fix::ALL {
            contents = fix.apply(self, &contents);
            after(fix)?;
        }
        Ok(contents)
    }

    /// Run every fix in order
    pub fn apply_all(&self, text: &str) -> String {
        match self.apply_each(text, |_| Ok::<(), Infallible>(())) {
            Ok(contents) => contents,
            Err(never) => match never {},
        }
    }
}

impl Default for Normalizer {
    /// Normalizer for [`DEFAULT_BLOG_HOST`]
    fn default() -> Self {
        Self::new(DEFAULT_BLOG_HOST).expect("escaped host is a valid pattern")
    }
}

/// Replace typographic quotes and ellipses with ASCII
pub fn replace_curly(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match CURLY_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
