use std::fs;

use dottmpl_core::types::RepositoryIdentity;
use dottmpl_renderer::{RenderContext, RenderError, Renderer};
use tempfile::TempDir;

fn identity() -> RepositoryIdentity {
    RepositoryIdentity {
        owner: "u".to_string(),
        repo: "r".to_string(),
    }
}

#[test]
fn unspaced_placeholders_render_exact_bytes() {
    let dir = TempDir::new().unwrap();
    let tpl = dir.path().join("t.tpl");
    let out = dir.path().join("out.txt");
    fs::write(&tpl, "{{owner}}/{{repo}}").unwrap();

    let written = Renderer::new()
        .render(&tpl, &out, &RenderContext::from(&identity()))
        .expect("render");

    assert_eq!(written, out);
    assert_eq!(fs::read(&out).unwrap(), b"u/r");
}

#[test]
fn control_constructs_are_available_to_templates() {
    let dir = TempDir::new().unwrap();
    let tpl = dir.path().join("contact.md");
    fs::write(
        &tpl,
        "# {{ repo | upper }}\n{% if owner == \"u\" %}maintained by @{{ owner }}{% endif %}\n",
    )
    .unwrap();

    let out = Renderer::new()
        .render_to_string(&tpl, &RenderContext::from(&identity()))
        .unwrap();
    assert_eq!(out, "# R\nmaintained by @u\n");
}

#[test]
fn failed_render_leaves_existing_output_untouched() {
    let dir = TempDir::new().unwrap();
    let tpl = dir.path().join("bad.tpl");
    let out = dir.path().join("out.txt");
    fs::write(&tpl, "{{ Username }}").unwrap();
    fs::write(&out, "previous").unwrap();

    let err = Renderer::new()
        .render(&tpl, &out, &RenderContext::from(&identity()))
        .unwrap_err();
    assert!(matches!(err, RenderError::TemplateExecution { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}
