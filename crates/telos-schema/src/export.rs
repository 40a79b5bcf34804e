//! # JSON-Schema Export
//!
//! Renders a validated [`FunctionDefinition`] as a JSON-Schema object
//! in the tool-calling definition shape consumed by LLM clients:
//!
//! ```json
//! {
//!   "name": "salute",
//!   "description": "Say hello to someone.",
//!   "parameters": {
//!     "type": "object",
//!     "properties": { "who": { "type": "string", "description": "..." } },
//!     "required": ["who"]
//!   }
//! }
//! ```
//!
//! Options become `enum`, a regex becomes `pattern`, and a non-null
//! default is carried through as `default`.

use serde_json::{json, Map, Value as Json};
use telos_core::{Kind, TypeExpr, Value};

use crate::definition::FunctionDefinition;
use crate::parameter::Parameter;

fn json_type_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Text => "string",
        Kind::Integer => "integer",
        Kind::Float => "number",
        Kind::Boolean => "boolean",
        Kind::List => "array",
        Kind::Mapping => "object",
    }
}

fn type_property(ty: &TypeExpr) -> Map<String, Json> {
    let mut property = Map::new();
    property.insert(
        "type".to_string(),
        Json::String(json_type_name(ty.base()).to_string()),
    );
    if let Some(element) = ty.element() {
        property.insert(
            "items".to_string(),
            json!({ "type": json_type_name(element) }),
        );
    }
    property
}

fn parameter_property(parameter: &Parameter) -> Json {
    let mut property = type_property(parameter.type_expr());
    if !parameter.description().is_empty() {
        property.insert(
            "description".to_string(),
            Json::String(parameter.description().to_string()),
        );
    }
    if let Some(pattern) = parameter.regex() {
        property.insert("pattern".to_string(), Json::String(pattern.to_string()));
    }
    if let Some(options) = parameter.options() {
        property.insert(
            "enum".to_string(),
            Json::Array(options.iter().cloned().map(Json::from).collect()),
        );
    }
    if !parameter.default().is_null() {
        property.insert(
            "default".to_string(),
            Json::from(parameter.default().clone()),
        );
    }
    Json::Object(property)
}

/// Render a definition in the tool-calling shape.
pub fn export_definition(definition: &FunctionDefinition) -> Json {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for parameter in definition.parameters() {
        properties.insert(parameter.name().to_string(), parameter_property(parameter));
        if parameter.required() {
            required.push(Json::String(parameter.name().to_string()));
        }
    }

    json!({
        "name": definition.name(),
        "description": definition.description(),
        "parameters": {
            "title": definition.name(),
            "type": "object",
            "properties": properties,
            "required": required,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(document: serde_json::Value) -> FunctionDefinition {
        serde_json::from_value(document).unwrap()
    }

    #[test]
    fn exports_required_text_parameter() {
        let exported = export_definition(&definition(json!({
            "name": "salute",
            "description": "Say hello to someone.",
            "parameters": [
                {"name": "who", "description": "Name of whom to salute. o7", "type": "text"}
            ],
            "reference": "demo.salute",
            "response": {"msg": "text"},
        })));
        assert_eq!(exported["name"], "salute");
        assert_eq!(
            exported["parameters"]["properties"]["who"]["type"],
            "string"
        );
        assert_eq!(exported["parameters"]["required"], json!(["who"]));
    }

    #[test]
    fn exports_constraints_and_defaults() {
        let exported = export_definition(&definition(json!({
            "name": "classify",
            "parameters": [
                {"name": "mode", "type": "text", "required": false,
                 "default": "fast", "options": ["fast", "slow"]},
                {"name": "labels", "type": "list[text]"},
            ],
            "reference": "text.classify",
            "response": {"label": "text"},
        })));
        let properties = &exported["parameters"]["properties"];
        assert_eq!(properties["mode"]["enum"], json!(["fast", "slow"]));
        assert_eq!(properties["mode"]["default"], "fast");
        assert_eq!(properties["labels"]["type"], "array");
        assert_eq!(properties["labels"]["items"]["type"], "string");
        assert_eq!(exported["parameters"]["required"], json!(["labels"]));
    }

    #[test]
    fn exports_pattern() {
        let exported = export_definition(&definition(json!({
            "name": "lookup",
            "parameters": [
                {"name": "code", "type": "text", "regex": "^[A-Z]{3}$"}
            ],
            "reference": "demo.lookup",
            "response": {"result": "text"},
        })));
        assert_eq!(
            exported["parameters"]["properties"]["code"]["pattern"],
            "^[A-Z]{3}$"
        );
    }
}
