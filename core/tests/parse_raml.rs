use pretty_assertions::assert_eq;
use ramlwrap_core::{
    parse_raml_file, render_view, MethodKind, ParseOptions, RamlError, SchemaDirection, View,
    ViewRequest,
};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

const API: &str = r#"#%RAML 0.8
title: Pet Store
version: v1
mediaType: application/json
documentation:
  - title: Getting started
    content: !include docs/intro.md
securitySchemes:
  - token:
      type: x-custom
/pets:
  displayName: Pets
  description: All the pets
  post:
    description: Add a pet
    body:
      application/json:
        schema: !include schemas/pet.json
        example: !include examples/pet.json
  get:
    responses:
      404:
        description: none
      200:
        description: The pets
        body:
          application/json:
            schema: !include schemas/pets.json
  /{petId}: !include resources/pet.raml
/owners:
  displayName: Owners
  /{ownerId}:
    displayName: Owner
"#;

const PET_RESOURCE: &str = r#"displayName: Pet
put:
  body:
    application/json:
      schema: !include ../schemas/pet.json
get:
  description: Fetch one pet
"#;

const PET_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "type": "object",
  "definitions": {
    "Owner": {
      "type": "object",
      "properties": {
        "name": { "type": "string" },
        "favourite": { "$ref": "#/definitions/Tag" }
      }
    },
    "Tag": { "type": "object", "properties": { "label": { "type": "string" } } }
  },
  "properties": {
    "name": { "type": "string" },
    "owner": { "$ref": "#/definitions/Owner" },
    "tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } },
    "vet": { "$ref": "#/definitions/Missing" }
  }
}"##;

const PETS_SCHEMA: &str = r##"{
  "definitions": { "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } } },
  "type": "object",
  "properties": {
    "items": { "type": "array", "items": { "$ref": "#/definitions/Pet" } }
  }
}"##;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "api.raml", API);
    write(dir.path(), "resources/pet.raml", PET_RESOURCE);
    write(dir.path(), "schemas/pet.json", PET_SCHEMA);
    write(dir.path(), "schemas/pets.json", PETS_SCHEMA);
    write(dir.path(), "examples/pet.json", r#"{"name": "Rex"}"#);
    write(dir.path(), "docs/intro.md", "Welcome.\n");
    let root = dir.path().join("api.raml");
    (dir, root)
}

#[test]
fn test_endpoint_order_and_levels() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();

    let summary: Vec<(&str, &str, i32)> = doc
        .endpoints
        .iter()
        .map(|e| (e.url.as_str(), e.display_name.as_str(), e.level))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("/owners", "Owners", -1),
            ("/owners/{ownerId}", "Owner", 0),
            ("/pets", "Pets", -1),
            ("/pets/{petId}", "Pet", 0),
        ]
    );
    assert!(doc.failures.is_empty());
}

#[test]
fn test_document_metadata() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();

    assert_eq!(doc.title.as_deref(), Some("Pet Store"));
    assert_eq!(doc.version.as_deref(), Some("v1"));
    assert_eq!(doc.media_type.as_deref(), Some("application/json"));
    assert!(doc.description.is_none());
    assert_eq!(doc.documentation["content"], json!("Welcome.\n"));
    assert_eq!(doc.security_schemes["token"], json!({ "type": "x-custom" }));
    assert!(doc.traits.is_empty());
}

#[test]
fn test_request_schema_inlined_and_original_kept() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();
    let pets = doc.endpoint("/pets").unwrap();

    let kinds: Vec<MethodKind> = pets.methods.iter().map(|m| m.method_type).collect();
    assert_eq!(kinds, vec![MethodKind::Get, MethodKind::Post]);

    let post = pets.method(MethodKind::Post).unwrap();
    assert_eq!(post.description.as_deref(), Some("Add a pet"));
    assert_eq!(post.request_content_type.as_deref(), Some("application/json"));
    assert_eq!(post.request_example, Some(json!({ "name": "Rex" })));

    let schema = post.request_schema.as_ref().unwrap();
    let tag = json!({ "type": "object", "properties": { "label": { "type": "string" } } });
    assert_eq!(
        schema["properties"]["owner"],
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" }, "favourite": tag }
        })
    );
    assert_eq!(schema["properties"]["tags"]["items"], tag);
    assert_eq!(
        schema["properties"]["vet"],
        json!({ "$ref": "#/definitions/Missing" })
    );

    let original = post.request_schema_original.as_ref().unwrap();
    assert_eq!(
        original["properties"]["owner"],
        json!({ "$ref": "#/definitions/Owner" })
    );
    assert_eq!(
        original["definitions"]["Owner"]["properties"]["favourite"],
        json!({ "$ref": "#/definitions/Tag" })
    );
}

#[test]
fn test_response_from_200_only() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();
    let get = doc
        .endpoint("/pets")
        .and_then(|e| e.method(MethodKind::Get))
        .unwrap();

    assert_eq!(get.response_description.as_deref(), Some("The pets"));
    assert_eq!(get.response_content_type.as_deref(), Some("application/json"));
    assert_eq!(
        get.response_schema.as_ref().unwrap()["properties"]["items"]["items"],
        json!({ "type": "object", "properties": { "id": { "type": "integer" } } })
    );
    assert!(get.request_content_type.is_none());
    assert!(get.display_name.is_none());
}

#[test]
fn test_included_resource_resolves_relative_paths() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();
    let pet = doc.endpoint("/pets/{petId}").unwrap();

    let put = pet.method(MethodKind::Put).unwrap();
    assert_eq!(
        put.request_schema.as_ref().unwrap()["properties"]["name"],
        json!({ "type": "string" })
    );
    assert_eq!(
        pet.method(MethodKind::Get).unwrap().description.as_deref(),
        Some("Fetch one pet")
    );
}

#[test]
fn test_schema_views() {
    let (_dir, root) = fixture();
    let doc = parse_raml_file(&root, &ParseOptions::default()).unwrap();

    let view = render_view(
        &doc,
        &ViewRequest::Schema {
            entry: "/pets/{petId}".into(),
            direction: SchemaDirection::Request,
        },
    )
    .unwrap();
    assert!(matches!(view, View::Schema(Some(_))));

    let view = render_view(
        &doc,
        &ViewRequest::Schema {
            entry: "/owners".into(),
            direction: SchemaDirection::Request,
        },
    )
    .unwrap();
    assert_eq!(view, View::Schema(None));

    let err = render_view(
        &doc,
        &ViewRequest::Schema {
            entry: "/pets".into(),
            direction: SchemaDirection::Response,
        },
    )
    .unwrap_err();
    assert!(matches!(err, RamlError::NotImplemented(_)));
}

#[test]
fn test_missing_root_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_raml_file(dir.path().join("absent.raml"), &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, RamlError::Include { .. }));
}
