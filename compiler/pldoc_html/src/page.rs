//! Package pages.
//!
//! Each page has a search dialog over the package's declarations, a
//! sidebar linking every package of the run, and one section per
//! declaration category. Empty sections are left out.

use rustc_hash::{FxHashMap, FxHashSet};

use pldoc_ir::{CommentGroup, Documented, FileSet, Ident, Package};

use crate::comment::format_doc;
use crate::emitter::{Emitter, StringEmitter};
use crate::listing::Listing;
use crate::{page_file_name, DEFAULT_TITLE};

/// One documented declaration.
struct Entry<'a> {
    anchor: String,
    header: &'static str,
    name: &'a str,
    listing: String,
    doc: Option<&'a CommentGroup>,
}

struct Section<'a> {
    id: &'static str,
    title: &'static str,
    entries: Vec<Entry<'a>>,
}

/// Unique fragment identifiers within a page.
///
/// Overloaded names get `-2`, `-3`, ... suffixes in declaration order.
#[derive(Default)]
struct Anchors {
    seen: FxHashMap<String, usize>,
}

impl Anchors {
    fn make(&mut self, name: &str) -> String {
        let base: String = name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '_' | '$' | '#') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }

    fn entry<'a, T: Listing + Documented>(&mut self, node: &'a T, name: &'a Ident) -> Entry<'a> {
        Entry {
            anchor: self.make(name.as_str()),
            header: node.header(),
            name: name.as_str(),
            listing: node.listing(),
            doc: node.doc(),
        }
    }
}

fn sections(package: &Package) -> Vec<Section<'_>> {
    let mut anchors = Anchors::default();
    let sections = vec![
        Section {
            id: "types",
            title: "Types",
            entries: package
                .types
                .iter()
                .map(|t| anchors.entry(t, &t.name))
                .collect(),
        },
        Section {
            id: "subtypes",
            title: "Subtypes",
            entries: package
                .subtypes
                .iter()
                .map(|s| anchors.entry(s, &s.name))
                .collect(),
        },
        Section {
            id: "variables",
            title: "Variables, constants and exceptions",
            entries: package
                .variables
                .iter()
                .map(|v| anchors.entry(v, &v.name))
                .collect(),
        },
        Section {
            id: "cursors",
            title: "Cursors",
            entries: package
                .cursors
                .iter()
                .map(|c| anchors.entry(c, &c.name))
                .collect(),
        },
        Section {
            id: "functions",
            title: "Functions and procedures",
            entries: package
                .functions
                .iter()
                .map(|f| anchors.entry(f, &f.name))
                .collect(),
        },
    ];
    sections
        .into_iter()
        .filter(|s| !s.entries.is_empty())
        .collect()
}

/// Render the page for `package`. `set` supplies the sidebar and title.
pub fn render_page(package: &Package, set: &FileSet) -> String {
    let title = set.description.as_deref().unwrap_or(DEFAULT_TITLE);
    let sections = sections(package);
    let mut page = PageWriter {
        out: StringEmitter::with_capacity(16 * 1024),
    };

    page.head(&format!("{} - {title}", package.name));
    page.search_dialog(&sections);
    page.sidebar(title, set, package.name.as_str());

    page.out.open("main", &[("class", "content")]);
    page.out.emit_newline();
    page.heading("h1", "package", package.name.as_str());
    page.doc(package.doc.as_ref());
    for section in &sections {
        page.section(section);
    }
    page.out.close("main");
    page.out.emit_newline();

    page.out.emit("<script src=\"pldoc.js\"></script>\n</body>\n</html>");
    page.out.ensure_trailing_newline();
    page.out.output()
}

struct PageWriter {
    out: StringEmitter,
}

impl PageWriter {
    fn line(&mut self, html: &str) {
        self.out.emit(html);
        self.out.emit_newline();
    }

    fn head(&mut self, title: &str) {
        self.line("<!DOCTYPE html>");
        self.line("<html lang=\"en\">");
        self.line("<head>");
        self.line("<meta charset=\"utf-8\">");
        self.line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        self.out.element("title", &[], title);
        self.out.emit_newline();
        self.line("<link rel=\"stylesheet\" href=\"main.css\">");
        self.line("</head>");
        self.line("<body>");
    }

    fn search_dialog(&mut self, sections: &[Section<'_>]) {
        self.line("<div id=\"modal\" class=\"modal invisible-item\">");
        self.line("<div class=\"search-box\">");
        self.line(
            "<input id=\"search-input\" type=\"text\" placeholder=\"Search declarations\" autocomplete=\"off\">",
        );
        self.line("<div id=\"list-wrap\" class=\"list-wrap\">");
        for entry in sections.iter().flat_map(|s| &s.entries) {
            let href = format!("#{}", entry.anchor);
            self.out.open("a", &[("href", &href)]);
            self.out.element("span", &[("class", "decl-kind")], entry.header);
            self.out.emit(" ");
            self.out.emit_text(entry.name);
            self.out.close("a");
            self.out.emit_newline();
        }
        self.line("</div>");
        self.line("</div>");
        self.line("</div>");
    }

    fn sidebar(&mut self, title: &str, set: &FileSet, current: &str) {
        self.line("<nav class=\"sidebar\">");
        self.out.element("h2", &[], title);
        self.out.emit_newline();
        self.line("<button id=\"search-button\" type=\"button\">Search <kbd>f</kbd></button>");
        self.line("<ul class=\"package-list\">");

        let mut listed = FxHashSet::default();
        for package in set.packages() {
            let name = package.name.as_str();
            if !listed.insert(name) {
                continue;
            }
            let href = page_file_name(name);
            self.out.open("li", &[]);
            if name == current {
                self.out
                    .element("a", &[("class", "current"), ("href", &href)], name);
            } else {
                self.out.element("a", &[("href", &href)], name);
            }
            self.out.close("li");
            self.out.emit_newline();
        }
        self.line("</ul>");
        self.line("</nav>");
    }

    fn heading(&mut self, tag: &str, kind: &str, name: &str) {
        self.out.open(tag, &[]);
        self.out.element("span", &[("class", "decl-kind")], kind);
        self.out.emit(" ");
        self.out.emit_text(name);
        self.out.close(tag);
        self.out.emit_newline();
    }

    fn doc(&mut self, doc: Option<&CommentGroup>) {
        let html = format_doc(doc);
        if html.is_empty() {
            return;
        }
        self.line("<div class=\"doc\">");
        self.line(&html);
        self.line("</div>");
    }

    fn section(&mut self, section: &Section<'_>) {
        self.out.open("section", &[("id", section.id)]);
        self.out.emit_newline();
        self.out.element("h2", &[], section.title);
        self.out.emit_newline();
        for entry in &section.entries {
            self.out
                .open("div", &[("class", "decl"), ("id", &entry.anchor)]);
            self.out.emit_newline();
            self.heading("h3", entry.header, entry.name);
            self.out
                .element("pre", &[("class", "listing")], &entry.listing);
            self.out.emit_newline();
            self.doc(entry.doc);
            self.line("</div>");
        }
        self.line("</section>");
    }
}
