//! Single-tag usage snippets.

use tumbler_carton::{js_number, keys, PropValue, PropertyBag};

use crate::types::{GenerateError, GenerateOptions, BINDING_DIRECTIVE};

/// Render a property bag as a self-closing component tag.
///
/// Entries are skipped when their value is `Null`, when the key is the
/// bound `value`, or when the key is `options` and the bag selects the
/// multi design (those options are declared as state instead). Every
/// remaining entry becomes one attribute, in bag order, after the
/// optional `bind:value` directive:
///
/// ```
/// use tumbler_carton::bag;
/// use tumbler_sketch::{render_tag, GenerateOptions};
///
/// let props = bag! { "value" => true, "size" => "lg", "animationDuration" => 300 };
/// let tag = render_tag("Switch", &props, &GenerateOptions::default()).unwrap();
///
/// assert_eq!(tag, "<Switch\n  bind:value\n  size=\"lg\"\n  animationDuration={300}\n/>");
/// ```
///
/// String values are interpolated verbatim; a `"` inside one produces
/// ambiguous markup.
pub fn render_tag(
    component_name: &str,
    props: &PropertyBag,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let multi = keys::is_multi_design(props);

    let mut attributes = Vec::with_capacity(props.len() + 1);
    if options.include_binding {
        attributes.push(BINDING_DIRECTIVE.to_string());
    }

    for (key, value) in props.iter() {
        if value.is_null() {
            continue;
        }
        if key == keys::VALUE {
            continue;
        }
        if key == keys::OPTIONS && multi {
            continue;
        }
        attributes.push(render_attribute(key, value)?);
    }

    let mut code = String::with_capacity(
        component_name.len() + 4 + attributes.iter().map(|a| a.len() + 3).sum::<usize>(),
    );
    code.push('<');
    code.push_str(component_name);
    if !attributes.is_empty() {
        code.push('\n');
        for attribute in &attributes {
            code.push_str("  ");
            code.push_str(attribute);
            code.push('\n');
        }
    }
    code.push_str("/>");

    Ok(code)
}

/// Format one `name=value` attribute.
fn render_attribute(name: &str, value: &PropValue) -> Result<String, GenerateError> {
    Ok(match value {
        PropValue::String(s) => format!("{}=\"{}\"", name, s),
        PropValue::Number(n) => format!("{}={{{}}}", name, js_number(*n)),
        PropValue::Bool(b) => format!("{}={{{}}}", name, b),
        PropValue::List(_) | PropValue::Object(_) | PropValue::Null => {
            format!("{}={{{}}}", name, serde_json::to_string(value)?)
        }
    })
}
