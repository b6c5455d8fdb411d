use super::*;
use pretty_assertions::assert_eq;

fn file_set(sources: &[(&str, &str)]) -> FileSet {
    let mut set = FileSet::new(Some(DEFAULT_TITLE.to_string()));
    for (name, src) in sources {
        set.add(pldoc_parse::parse(name, src.as_bytes()).unwrap());
    }
    set
}

#[test]
fn render_writes_pages_and_assets() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("docs");
    let set = file_set(&[
        ("a.pks", "create package alpha is procedure p; end alpha;"),
        ("b.pks", "create package beta is x number; end beta;\ncreate package gamma is end;"),
    ]);

    let pages = render(&out, &set).unwrap();
    let names: Vec<String> = pages
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["alpha.html", "beta.html", "gamma.html"]);

    assert_eq!(fs::read_to_string(out.join("main.css")).unwrap(), MAIN_CSS);
    assert_eq!(fs::read_to_string(out.join("pldoc.js")).unwrap(), PLDOC_JS);
    let beta = fs::read_to_string(out.join("beta.html")).unwrap();
    assert!(beta.contains("<pre class=\"listing\">x number</pre>"));
}

#[test]
fn render_with_no_packages_still_writes_assets() {
    let dir = tempfile::tempdir().unwrap();
    let pages = render(dir.path(), &FileSet::default()).unwrap();
    assert!(pages.is_empty());
    assert!(dir.path().join("main.css").is_file());
    assert!(dir.path().join("pldoc.js").is_file());
}

#[test]
fn render_reports_unwritable_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = render(&blocker.join("docs"), &FileSet::default()).unwrap_err();
    assert!(matches!(err, RenderError::CreateDir { .. }));
    assert!(err.to_string().starts_with("cannot create output directory "));
}

#[test]
fn page_file_names() {
    assert_eq!(page_file_name("emp_api"), "emp_api.html");
}

#[test]
fn assets_reference_page_ids() {
    for id in ["modal", "search-input", "search-button", "list-wrap"] {
        assert!(PLDOC_JS.contains(id), "pldoc.js should use #{id}");
    }
    for class in ["invisible-item", "active-item", "decl-kind", "listing"] {
        assert!(MAIN_CSS.contains(class), "main.css should style .{class}");
    }
}
