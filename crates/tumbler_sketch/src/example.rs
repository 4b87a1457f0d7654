//! Import statements and full runnable examples.

use tumbler_carton::{keys, PropValue, PropertyBag};

use crate::tag::render_tag;
use crate::types::{GenerateError, GenerateOptions, Snippet};

/// Render a default import of one or more components.
///
/// Fails with [`GenerateError::InvalidArgument`] when `component_names` is
/// empty.
pub fn render_import_statement<S: AsRef<str>>(
    component_names: &[S],
    source_module: &str,
) -> Result<String, GenerateError> {
    if component_names.is_empty() {
        return Err(GenerateError::InvalidArgument(
            "import statement needs at least one component name".to_string(),
        ));
    }

    let names = component_names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("import {} from '{}';", names, source_module))
}

/// Render a complete component: a `<script>` block with the import and
/// the bound state, a blank line, then the tag.
///
/// The bound `value` starts as `false`. For the multi design with a
/// non-empty `options` list it starts as the first option instead, and
/// the options are declared as state right below it.
pub fn render_full_example(
    component_name: &str,
    props: &PropertyBag,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let import = render_import_statement(&[component_name], &options.source_module)?;
    let tag = render_tag(component_name, props, options)?;
    let state = render_state(props)?;

    Ok(format!(
        "<script>\n  {}\n\n{}\n</script>\n\n{}",
        import, state, tag
    ))
}

/// Render import, tag and full example together.
pub fn render_snippet(
    component_name: &str,
    props: &PropertyBag,
    options: &GenerateOptions,
) -> Result<Snippet, GenerateError> {
    Ok(Snippet {
        import: render_import_statement(&[component_name], &options.source_module)?,
        tag: render_tag(component_name, props, options)?,
        full: render_full_example(component_name, props, options)?,
    })
}

/// State declarations of the script block.
fn render_state(props: &PropertyBag) -> Result<String, GenerateError> {
    let segments = multi_options(props);

    let mut state = String::from("  let value = ");
    match segments {
        Some(list) => {
            // `multi_options` only yields non-empty lists.
            let first = list.first().map(PropValue::to_string).unwrap_or_default();
            state.push('\'');
            state.push_str(&first);
            state.push_str("';");
            state.push_str("\n  let options = ");
            state.push_str(&serde_json::to_string_pretty(&PropValue::List(list.to_vec()))?);
            state.push(';');
        }
        None => state.push_str("false;"),
    }

    Ok(state)
}

/// The `options` list of a multi-design bag, when it has any entries.
fn multi_options(props: &PropertyBag) -> Option<&[PropValue]> {
    if !keys::is_multi_design(props) {
        return None;
    }
    props
        .get(keys::OPTIONS)
        .and_then(PropValue::as_list)
        .filter(|list| !list.is_empty())
}
