//! End-to-end coverage of the proto2-era surface (groups, extends,
//! extension ranges) and the editions form, including the permissive
//! trailing-semicolon tolerance that real proto2 corpora rely on.

use protosyn::ast::{ExtendItem, FieldLabel, MessageItem, ProtoItem};
use protosyn::{ParseOptions, interpret_unordered, parse};

const PROTO2_SCHEMA: &str = r#"
syntax = "proto2";

package legacy;

message Record {
  required string id = 1;
  optional int32 weight = 2 [default = 10];

  optional group Attributes = 3 {
    optional string key = 1;
    optional string value = 2;
  };

  extensions 100 to 199;
  extensions 500 to max;
}

extend Record {
  optional bool audited = 150;
  optional group Audit = 151 {
    optional string actor = 1;
  };
}
"#;

#[test]
fn test_trailing_semicolon_is_empty_statement_without_permissive() {
    // Strictly parsed, the `;` after each group's `}` survives as an empty
    // statement in the surrounding body rather than ending the block.
    let proto = parse(PROTO2_SCHEMA, &ParseOptions::default()).unwrap();
    let record = proto
        .body
        .iter()
        .find_map(|item| match item {
            ProtoItem::Message(m) => Some(m),
            _ => None,
        })
        .unwrap();
    assert_eq!(record.body.len(), 6);
    assert!(matches!(record.body[3], MessageItem::EmptyStatement(_)));
}

#[test]
fn test_proto2_schema_parses_with_permissive() {
    let options = ParseOptions {
        permissive: true,
        ..ParseOptions::default()
    };
    let proto = parse(PROTO2_SCHEMA, &options).unwrap();

    let record = proto
        .body
        .iter()
        .find_map(|item| match item {
            ProtoItem::Message(m) => Some(m),
            _ => None,
        })
        .unwrap();
    assert_eq!(record.name, "Record");
    // The `;` after the group's `}` ends the group instead of lingering as
    // an empty statement.
    assert_eq!(record.body.len(), 5);

    match &record.body[2] {
        MessageItem::Group(group) => {
            assert_eq!(group.label, FieldLabel::Optional);
            assert_eq!(group.name, "Attributes");
            assert_eq!(group.body.len(), 2);
            // The closing line reads `  };` so the trailing `;` at column 4,
            // not the `}` at column 3, ends the block.
            assert_eq!(group.meta.end.column, 4);
        }
        other => panic!("expected group, got {:?}", other),
    }

    let extension_ranges: Vec<&protosyn::ast::Extensions> = record
        .body
        .iter()
        .filter_map(|item| match item {
            MessageItem::Extensions(e) => Some(e),
            _ => None,
        })
        .collect();
    assert_eq!(extension_ranges.len(), 2);
    assert_eq!(extension_ranges[1].ranges[0].end.as_deref(), Some("max"));

    let extend = proto
        .body
        .iter()
        .find_map(|item| match item {
            ProtoItem::Extend(e) => Some(e),
            _ => None,
        })
        .unwrap();
    assert_eq!(extend.message_type, "Record");
    assert!(matches!(extend.body[0], ExtendItem::Field(_)));
    match &extend.body[1] {
        ExtendItem::Group(group) => assert_eq!(group.name, "Audit"),
        other => panic!("expected group in extend, got {:?}", other),
    }
}

#[test]
fn test_proto2_unordered_view() {
    let options = ParseOptions {
        permissive: true,
        ..ParseOptions::default()
    };
    let proto = parse(PROTO2_SCHEMA, &options).unwrap();
    let unordered = interpret_unordered(&proto);

    let record = &unordered.body.messages[0];
    assert_eq!(record.body.fields.len(), 2);
    assert_eq!(record.body.groups.len(), 1);
    assert_eq!(record.body.extensions.len(), 2);
    assert_eq!(unordered.body.extends.len(), 1);
    assert_eq!(unordered.body.extends[0].body.fields.len(), 1);
    assert_eq!(unordered.body.extends[0].body.groups.len(), 1);
}

#[test]
fn test_editions_file() {
    let proto = parse(
        "edition = \"2023\";\n\
         message M {\n\
           int32 a = 1 [features.field_presence = IMPLICIT];\n\
           extensions 4 to 1000 [declaration = { number: 4, full_name: \".x.y\", type: \".x.Z\" }];\n\
         }\n",
        &ParseOptions::default(),
    )
    .unwrap();
    let edition = proto.edition.as_ref().unwrap();
    assert_eq!(edition.edition, "2023");
    assert!(proto.syntax.is_none());

    let message = match &proto.body[0] {
        ProtoItem::Message(m) => m,
        other => panic!("expected message, got {:?}", other),
    };
    match &message.body[0] {
        MessageItem::Field(f) => {
            assert_eq!(f.options[0].name, "features.field_presence");
            assert_eq!(f.options[0].constant, "IMPLICIT");
        }
        other => panic!("expected field, got {:?}", other),
    }
    match &message.body[1] {
        MessageItem::Extensions(e) => {
            assert_eq!(e.declarations.len(), 1);
            assert_eq!(e.declarations[0].full_name, "\".x.y\"");
        }
        other => panic!("expected extensions, got {:?}", other),
    }
}
