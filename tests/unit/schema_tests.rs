//! Engine-level tests: two-pass building and document rendering

use pretty_assertions::assert_eq;
use typeorm_dbml::dbml::render_document;
use typeorm_dbml::model::build_schema;
use typeorm_dbml::parser::{parse_entity_source, ClassDescriptor};

fn render(classes: &[ClassDescriptor]) -> String {
    render_document(&build_schema(classes).expect("schema should build"))
}

#[test]
fn test_uuid_primary_key_scenario() {
    let classes = parse_entity_source(
        r#"
        @Entity('User')
        export class User {
          @PrimaryGeneratedColumn('uuid')
          uuid: string;

          @Column()
          email: string;
        }
        "#,
    );

    assert_eq!(
        render(&classes),
        "Table User {\n  uuid varchar [pk]\n  email varchar\n}"
    );
}

#[test]
fn test_relationship_scenario_with_integer_target_key() {
    let classes = parse_entity_source(
        r#"
        @Entity('Post')
        class Post {
          @PrimaryGeneratedColumn()
          id: number;

          @ManyToOne(() => User)
          author: User;
        }

        @Entity('User')
        class User {
          @PrimaryGeneratedColumn()
          id: number;
        }
        "#,
    );

    let schema = build_schema(&classes).unwrap();
    let rendered = render_document(&schema);
    assert!(rendered.ends_with("Ref: Post.author_id > User.id"));
}

#[test]
fn test_relationship_uses_target_primary_key_column() {
    let classes = parse_entity_source(
        r#"
        @Entity('Post')
        class Post {
          @ManyToOne(() => User)
          author: User;
        }

        @Entity('User')
        class User {
          @PrimaryGeneratedColumn('uuid')
          uuid: string;
        }
        "#,
    );

    let schema = build_schema(&classes).unwrap();
    assert_eq!(schema.refs[0].target_key, "uuid");
}

#[test]
fn test_forward_reference_is_order_independent() {
    let referrer = r#"
        @Entity()
        class Task {
          @PrimaryGeneratedColumn()
          id: number;

          @ManyToOne(() => Owner)
          owner: Owner;
        }
    "#;
    let target = r#"
        @Entity('account_owners')
        class Owner {
          @PrimaryGeneratedColumn('uuid')
          uuid: string;
        }
    "#;

    let forward = parse_entity_source(&format!("{referrer}{target}"));
    let backward = parse_entity_source(&format!("{target}{referrer}"));

    let forward_ref = &build_schema(&forward).unwrap().refs[0];
    let backward_ref = &build_schema(&backward).unwrap().refs[0];

    assert_eq!(forward_ref.target_entity, "account_owners");
    assert_eq!(forward_ref.target_key, "uuid");
    assert_eq!(forward_ref, backward_ref);
}

#[test]
fn test_ref_count_equals_relationship_field_count() {
    let classes = parse_entity_source(
        r#"
        @Entity()
        class Comment {
          @ManyToOne(() => User)
          author: User;

          @ManyToOne(() => Post)
          post: Post;
        }

        @Entity()
        class Post {
          @ManyToOne(() => User)
          author: User;
        }

        @Entity()
        class User {
          @PrimaryGeneratedColumn()
          id: number;
        }
        "#,
    );

    let schema = build_schema(&classes).unwrap();
    assert_eq!(schema.refs.len(), 3);
}

#[test]
fn test_engine_is_idempotent() {
    let source = r#"
        @Entity()
        class Post {
          @PrimaryGeneratedColumn()
          id: number;

          @Column({ nullable: true, default: 'draft' })
          state: string;

          @ManyToOne(() => Post)
          parent: Post;
        }
    "#;

    let first = render(&parse_entity_source(source));
    let second = render(&parse_entity_source(source));
    assert_eq!(first, second);
}

#[test]
fn test_modifiers_render_in_fixed_order() {
    let classes = parse_entity_source(
        "@Entity()\nclass Job { @Column({ default: 'queued', nullable: true })\nstate: string; }",
    );

    assert_eq!(
        render(&classes),
        "Table job {\n  state varchar [null, default: 'queued']\n}"
    );
}

#[test]
fn test_relationship_field_contributes_no_column_line() {
    let classes = parse_entity_source(
        r#"
        @Entity()
        class Comment {
          @PrimaryGeneratedColumn()
          id: number;

          @ManyToOne(() => User)
          author: User;
        }

        @Entity()
        class User {
          @PrimaryGeneratedColumn()
          id: number;
        }
        "#,
    );

    assert_eq!(
        render(&classes),
        "Table comment {\n  id integer [pk, increment]\n}\n\nTable user {\n  id integer [pk, increment]\n}\n\nRef: comment.author_id > user.id"
    );
}

#[test]
fn test_non_entity_classes_are_excluded() {
    let classes = parse_entity_source(
        "class Helper { x: number; }\n@Entity()\nclass Real { @Column() y: string; }",
    );
    let schema = build_schema(&classes).unwrap();
    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.tables[0].entity, "real");
}
