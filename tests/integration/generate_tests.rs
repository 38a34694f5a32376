//! End-to-end generation tests over fixture entity files

use pretty_assertions::assert_eq;

use crate::common::TestContext;

const BLOG_EXPECTED: &str = "\
Table comment {
  id integer [pk, increment]
  body text
}

Table posts {
  id integer [pk, increment]
  title varchar
  content varchar [null]
  created_at timestamp
}

Table User {
  uuid varchar [pk]
  email varchar
  is_active boolean [default: 'false']
  display_name varchar [null]
  created_at timestamp
}

Ref: comment.author_uuid > User.uuid
Ref: comment.post_id > posts.id
Ref: posts.author_id > User.uuid";

#[test]
fn test_blog_fixture_end_to_end() {
    let ctx = TestContext::with_fixture("blog");
    let report = ctx.generate().expect("generation should succeed");

    assert_eq!(report.files_processed, 3);
    assert_eq!(ctx.read_output(), BLOG_EXPECTED);
}

#[test]
fn test_glob_pattern_source() {
    let ctx = TestContext::with_fixture("blog");
    let pattern = format!("{}/**/*.ts", ctx.source_dir.display());
    let report = ctx.generate_from(&pattern).expect("generation should succeed");

    assert_eq!(report.files_processed, 3);
    assert_eq!(ctx.read_output(), BLOG_EXPECTED);
}

#[test]
fn test_forward_reference_across_files() {
    // a_task.ts sorts (and parses) before z_owner.ts, which carries both a
    // name override and a uuid primary key
    let ctx = TestContext::with_fixture("forward_ref");
    ctx.generate().expect("generation should succeed");

    let output = ctx.read_output();
    assert!(
        output.ends_with("Ref: task.owner_id > account_owners.uuid"),
        "unexpected document:\n{output}"
    );
}

#[test]
fn test_single_file_source() {
    let ctx = TestContext::with_fixture("forward_ref");
    let file = ctx.source_dir.join("z_owner.ts");
    let report = ctx
        .generate_from(&file.display().to_string())
        .expect("generation should succeed");

    assert_eq!(report.files_processed, 1);
    assert_eq!(
        ctx.read_output(),
        "Table account_owners {\n  uuid varchar [pk]\n  email varchar\n}"
    );
}

#[test]
fn test_no_matching_files_is_an_error() {
    let ctx = TestContext::new();
    let err = ctx.generate().unwrap_err();
    assert!(err.to_string().contains("No files found"));
}

#[test]
fn test_sources_without_entities_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_entity("helper.ts", "export class Helper { x: number; }");
    let err = ctx.generate().unwrap_err();
    assert!(err.to_string().contains("No entity classes"));
}

#[test]
fn test_output_path_that_looks_like_a_source_file_is_rejected() {
    let ctx = TestContext::with_fixture("blog");
    let err = typeorm_dbml::generate_dbml(typeorm_dbml::GenerateOptions {
        source_pattern: ctx.source_dir.display().to_string(),
        output_path: Some(ctx.source_dir.join("Post.ts")),
        verbose: false,
    })
    .unwrap_err();

    assert!(err.to_string().contains("looks like a TypeScript file"));
}

#[test]
fn test_declaration_files_are_skipped() {
    let ctx = TestContext::new();
    ctx.write_entity(
        "real.ts",
        "@Entity()\nexport class Real { @Column() name: string; }",
    );
    ctx.write_entity(
        "ghost.d.ts",
        "@Entity()\nexport declare class Ghost { name: string; }",
    );

    let report = ctx.generate().expect("generation should succeed");
    assert_eq!(report.files_processed, 1);
    assert_eq!(ctx.read_output(), "Table real {\n  name varchar\n}");
}

#[test]
fn test_bom_source_file() {
    let ctx = TestContext::new();
    ctx.write_entity(
        "note.ts",
        "\u{FEFF}@Entity()\nexport class Note { @Column() text: string; }",
    );

    ctx.generate().expect("generation should succeed");
    assert_eq!(ctx.read_output(), "Table note {\n  text varchar\n}");
}

#[test]
fn test_windows_1252_source_file() {
    let ctx = TestContext::new();
    // "café" in a comment, encoded as Windows-1252 (0xE9 is not valid UTF-8)
    let mut bytes = b"// caf\xe9\n@Entity()\nexport class Cafe { @Column() name: string; }".to_vec();
    bytes.push(b'\n');
    std::fs::write(ctx.source_dir.join("cafe.ts"), bytes).unwrap();

    ctx.generate().expect("generation should succeed");
    assert_eq!(ctx.read_output(), "Table cafe {\n  name varchar\n}");
}

#[test]
fn test_generated_document_is_stable_across_runs() {
    let ctx = TestContext::with_fixture("blog");
    ctx.generate().expect("generation should succeed");
    let first = ctx.read_output();
    ctx.generate().expect("generation should succeed");
    assert_eq!(first, ctx.read_output());
}
