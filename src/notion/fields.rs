// src/notion/fields.rs
//
// Per-kind accessors over a page's `properties` map. Notion nests every
// value under its kind key ({"type": "number", "number": 5.5}); each
// accessor walks one such shape and reads as absent when the label is
// missing, the kind differs, or the payload is empty.

use serde_json::{Map, Value};

/// Plain text of the first fragment of a title property.
pub fn title_text(props: &Map<String, Value>, label: &str) -> Option<String> {
    first_plain_text(props.get(label)?.get("title")?)
}

/// Plain text of the first fragment of a rich-text property.
pub fn rich_text(props: &Map<String, Value>, label: &str) -> Option<String> {
    first_plain_text(props.get(label)?.get("rich_text")?)
}

/// A number property. Only an actual JSON number counts.
pub fn number(props: &Map<String, Value>, label: &str) -> Option<f64> {
    props.get(label)?.get("number")?.as_f64()
}

/// The chosen option name of a single-select property.
pub fn select_name(props: &Map<String, Value>, label: &str) -> Option<String> {
    let name = props.get(label)?.get("select")?.get("name")?.as_str()?;
    Some(name.to_string())
}

/// A checkbox property; unset or malformed reads as unchecked.
pub fn checkbox(props: &Map<String, Value>, label: &str) -> bool {
    props
        .get(label)
        .and_then(|prop| prop.get("checkbox"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Direct URL of the first attachment of a files property. Externally
/// linked and Notion-hosted attachments nest their URL differently.
pub fn file_url(props: &Map<String, Value>, label: &str) -> Option<String> {
    let file = props.get(label)?.get("files")?.as_array()?.first()?;
    let url = match file.get("type")?.as_str()? {
        "external" => file.get("external")?.get("url")?.as_str()?,
        "file" => file.get("file")?.get("url")?.as_str()?,
        _ => return None,
    };
    Some(url.to_string())
}

fn first_plain_text(fragments: &Value) -> Option<String> {
    let text = fragments.as_array()?.first()?.get("plain_text")?.as_str()?;
    Some(text.to_string())
}
