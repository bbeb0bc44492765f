use crate::case::CaseStyle;
use crate::prompt::describe;
use serde_json::{json, Value};

pub fn function_name(style: CaseStyle) -> &'static str {
    match style {
        CaseStyle::Camel => "camel_case",
        CaseStyle::Kebab => "kebab_case",
        CaseStyle::Dot => "dot_case",
        CaseStyle::Snake => "snake_case",
        CaseStyle::Pascal => "pascal_case",
    }
}

/// Function-calling definitions, one per style, taking a single `input` string
pub fn tool_definitions(styles: &[CaseStyle]) -> Value {
    let tools: Vec<Value> = styles
        .iter()
        .map(|style| {
            json!({
                "name": function_name(*style),
                "description": describe(*style),
                "parameters": {
                    "type": "object",
                    "properties": {
                        "input": {
                            "type": "string",
                            "description": "Text to convert. May be empty."
                        }
                    },
                    "required": ["input"]
                }
            })
        })
        .collect();

    Value::Array(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions_shape() {
        let tools = tool_definitions(&CaseStyle::ALL);
        let tools = tools.as_array().unwrap();
        assert_eq!(tools.len(), 5);

        let kebab = &tools[1];
        assert_eq!(kebab["name"], "kebab_case");
        assert_eq!(kebab["parameters"]["required"][0], "input");
        assert_eq!(kebab["parameters"]["properties"]["input"]["type"], "string");
    }

    #[test]
    fn test_no_styles_gives_empty_array() {
        assert_eq!(tool_definitions(&[]), json!([]));
    }
}
