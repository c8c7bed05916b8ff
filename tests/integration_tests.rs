//! End-to-end tests through the public crate API: parse real-looking
//! schemas, check the JSON shape the CLI prints, and exercise the unordered
//! view and the visitor.

use pretty_assertions::assert_eq;

use protosyn::ast::{MessageItem, ProtoItem};
use protosyn::{ParseOptions, Visitor, interpret_unordered, parse, parse_reader};

const VENDOR_SCHEMA: &str = r#"
syntax = "proto3";

package store.v1;

import "google/api/annotations.proto";

option go_package = "example.com/store/v1;storev1";

message Item {
  string id = 1 [(validate.rules).string = { min_len: 1, max_len: 64 }];
  string title = 2;
}

service Store {
  rpc GetItem (GetItemRequest) returns (Item) {
    option (google.api.http) = {
      get: "/v1/items/{id}"
      additional_bindings { get: "/v1/legacy/items/{id}" }
    };
  };
}

message GetItemRequest {
  string id = 1;
}
"#;

#[test]
fn test_vendor_schema_needs_permissive() {
    assert!(parse(VENDOR_SCHEMA, &ParseOptions::default()).is_err());

    let options = ParseOptions {
        permissive: true,
        ..ParseOptions::default()
    };
    let proto = parse(VENDOR_SCHEMA, &options).unwrap();
    // package + import + option + two messages + service
    assert_eq!(proto.body.len(), 6);

    let service = proto
        .body
        .iter()
        .find_map(|item| match item {
            ProtoItem::Service(s) => Some(s),
            _ => None,
        })
        .unwrap();
    match &service.body[0] {
        protosyn::ast::ServiceItem::Rpc(rpc) => {
            assert_eq!(rpc.options[0].name, "(google.api.http)");
            assert_eq!(
                rpc.options[0].constant,
                "{get:\"/v1/items/{id}\"\nadditional_bindings{get:\"/v1/legacy/items/{id}\"}}"
            );
        }
        other => panic!("expected rpc, got {:?}", other),
    }
}

#[test]
fn test_json_shape_matches_cli_output() {
    let options = ParseOptions {
        filename: "m.proto".to_string(),
        ..ParseOptions::default()
    };
    let proto = parse("syntax = \"proto3\"; message M { int32 a = 1; }", &options).unwrap();
    let json = serde_json::to_value(&proto).unwrap();

    assert_eq!(json["filename"], "m.proto");
    assert_eq!(json["syntax"]["version"], "proto3");
    assert_eq!(json["syntax"]["version_quoted"], "\"proto3\"");
    let message = &json["body"][0]["Message"];
    assert_eq!(message["name"], "M");
    let field = &message["body"][0]["Field"];
    assert_eq!(field["type_name"], "int32");
    assert_eq!(field["number"], "1");
    assert_eq!(field["meta"]["start"]["filename"], "m.proto");
    assert_eq!(field["meta"]["start"]["line"], 1);
}

#[test]
fn test_parse_reader() {
    let bytes: &[u8] = b"syntax = \"proto3\"; enum E { E_UNSPECIFIED = 0; }";
    let proto = parse_reader(bytes, &ParseOptions::default()).unwrap();
    assert!(matches!(proto.body[0], ProtoItem::Enum(_)));
}

#[test]
fn test_unordered_view_is_order_stable_within_kinds() {
    let proto = parse(
        "syntax = \"proto3\";\n\
         message M {\n\
           int32 z = 1;\n\
           message B {}\n\
           int32 y = 2;\n\
           message A {}\n\
           int32 x = 3;\n\
         }\n",
        &ParseOptions::default(),
    )
    .unwrap();
    let unordered = interpret_unordered(&proto);
    let message = &unordered.body.messages[0];
    let field_names: Vec<&str> = message.body.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(field_names, vec!["z", "y", "x"]);
    let nested: Vec<&str> = message
        .body
        .messages
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(nested, vec!["B", "A"]);
}

#[test]
fn test_unordered_view_serializes() {
    let proto = parse(
        "syntax = \"proto3\"; package p; message M { int32 a = 1; }",
        &ParseOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(interpret_unordered(&proto)).unwrap();
    assert_eq!(json["body"]["packages"][0]["name"], "p");
    assert_eq!(json["body"]["messages"][0]["body"]["fields"][0]["name"], "a");
}

#[test]
fn test_visitor_walks_parsed_tree() {
    #[derive(Default)]
    struct FieldCounter {
        fields: usize,
        enum_fields: usize,
        rpcs: usize,
    }

    impl Visitor for FieldCounter {
        fn visit_field(&mut self, _field: &protosyn::ast::Field) -> bool {
            self.fields += 1;
            true
        }
        fn visit_enum_field(&mut self, _field: &protosyn::ast::EnumField) -> bool {
            self.enum_fields += 1;
            true
        }
        fn visit_rpc(&mut self, _rpc: &protosyn::ast::Rpc) -> bool {
            self.rpcs += 1;
            true
        }
    }

    let proto = parse(
        "syntax = \"proto3\";\n\
         message M { int32 a = 1; message N { int32 b = 1; } }\n\
         enum E { E_UNSPECIFIED = 0; E_ONE = 1; }\n\
         service S { rpc Get (M) returns (M); }\n",
        &ParseOptions::default(),
    )
    .unwrap();

    let mut counter = FieldCounter::default();
    proto.accept(&mut counter);
    assert_eq!(counter.fields, 2);
    assert_eq!(counter.enum_fields, 2);
    assert_eq!(counter.rpcs, 1);
}

#[test]
fn test_comment_attachment_end_to_end() {
    let proto = parse(
        "// file header\n\
         syntax = \"proto3\";\n\
         \n\
         // about M\n\
         message M { // opener\n\
           int32 a = 1; // about a\n\
         } // closer\n",
        &ParseOptions::default(),
    )
    .unwrap();

    assert_eq!(proto.syntax.as_ref().unwrap().comments[0].raw, "// file header");

    let message = match &proto.body[0] {
        ProtoItem::Message(m) => m,
        other => panic!("expected message, got {:?}", other),
    };
    assert_eq!(message.comments[0].raw, "// about M");
    assert_eq!(
        message.inline_comment_behind_left_curly.as_ref().unwrap().raw,
        "// opener"
    );
    assert_eq!(message.inline_comment.as_ref().unwrap().raw, "// closer");
    match &message.body[0] {
        MessageItem::Field(f) => {
            assert_eq!(f.inline_comment.as_ref().unwrap().raw, "// about a");
        }
        other => panic!("expected field, got {:?}", other),
    }
}

#[test]
fn test_parse_error_renders_found_expected_format() {
    let err = parse("syntax = \"proto3\"; message M {", &ParseOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "found \"<eof>\" but expected [messageType]; found \"<eof>\" but expected [;]");
}
