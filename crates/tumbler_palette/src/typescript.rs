//! TypeScript props interface generation.

use tumbler_carton::format::to_pascal_case;
use tumbler_carton::{js_number, keys, PropValue};

use crate::types::{ComponentDescriptor, Control, PropertySchema, ValueType};

/// Generate a TypeScript interface describing a component's props.
///
/// Every member is optional. The bound `value` comes first, then the
/// declared properties in editor order; components whose `design` offers
/// the multi-option variant also get an `options` list.
pub fn generate_typescript_props(descriptor: &ComponentDescriptor) -> String {
    let mut ts = String::with_capacity(1024);

    ts.push_str("export interface ");
    ts.push_str(&to_pascal_case(&descriptor.name));
    ts.push_str("Props {\n");

    ts.push_str("  ");
    ts.push_str(keys::VALUE);
    ts.push_str("?: ");
    ts.push_str(if supports_multi(descriptor) {
        "boolean | string"
    } else {
        "boolean"
    });
    ts.push_str(";\n");

    for property in &descriptor.properties {
        ts.push_str("  ");
        ts.push_str(&property.name);
        ts.push_str("?: ");
        ts.push_str(&property_ts_type(property));
        ts.push_str(";\n");
    }

    if supports_multi(descriptor) && descriptor.property(keys::OPTIONS).is_none() {
        ts.push_str("  ");
        ts.push_str(keys::OPTIONS);
        ts.push_str("?: string[];\n");
    }

    ts.push_str("}\n");

    ts
}

fn supports_multi(descriptor: &ComponentDescriptor) -> bool {
    descriptor.property(keys::DESIGN).is_some_and(|design| {
        design
            .control
            .options()
            .iter()
            .any(|opt| opt.value().as_str() == Some(keys::MULTI_DESIGN))
    })
}

/// Convert a property to its TypeScript type.
fn property_ts_type(property: &PropertySchema) -> String {
    match &property.control {
        Control::Select { options } if !options.is_empty() => options
            .iter()
            .map(|opt| literal_ts_type(opt.value()))
            .collect::<Vec<_>>()
            .join(" | "),
        _ => value_ts_type(property.value_type).to_string(),
    }
}

fn value_ts_type(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::String => "string",
        ValueType::Number => "number",
        ValueType::Boolean => "boolean",
        ValueType::Array => "unknown[]",
        ValueType::Object => "Record<string, unknown>",
    }
}

fn literal_ts_type(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("'{}'", s),
        PropValue::Number(n) => js_number(*n),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Null => "null".to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::switch_descriptor;
    use tumbler_carton::PropertyBag;

    #[test]
    fn test_switch_interface() {
        let ts = generate_typescript_props(&switch_descriptor());

        assert!(ts.starts_with("export interface SwitchProps {\n  value?: boolean | string;\n"));
        assert!(ts.contains(
            "  design?: 'slider' | 'ios' | 'inner' | 'modern' | 'material' | 'multi';\n"
        ));
        assert!(ts.contains("  label?: string;\n"));
        assert!(ts.contains("  animationDuration?: number;\n"));
        assert!(ts.contains("  disabled?: boolean;\n"));
        assert!(ts.contains("  color?: string;\n"));
        assert!(ts.contains("  onIcon?: '✓' | '✔️' |"));
        assert!(ts.ends_with("  options?: string[];\n}\n"));
    }

    #[test]
    fn test_plain_component_interface() {
        let descriptor = ComponentDescriptor {
            id: "badge".to_string(),
            name: "status-badge".to_string(),
            description: String::new(),
            properties: vec![
                PropertySchema::number("count"),
                PropertySchema::array("tags"),
                PropertySchema::select("level", Vec::<crate::SelectOption>::new()),
            ],
            defaults: PropertyBag::new(),
            examples: Vec::new(),
            import_path: String::new(),
        };

        assert_eq!(
            generate_typescript_props(&descriptor),
            "export interface StatusBadgeProps {\n  value?: boolean;\n  count?: number;\n  tags?: unknown[];\n  level?: string;\n}\n"
        );
    }
}
