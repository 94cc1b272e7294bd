use super::fragment::{GENERIC_INPUT_FIELD, GENERIC_SUBMIT_BUTTON};
use super::jsx::{
    line, write_change_handler, write_component_close, write_component_open,
    write_inline_imports, write_submit_handler,
};
use crate::catalog::get_component;
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Generic.component_name();

/// Fallback form built from the ranked component keys.
///
/// Keys without a catalog entry are skipped. The input field needs both
/// `input` and `label` among the keys; the submit button needs `button`.
pub fn generate_generic_form(components: &[&str]) -> String {
    let names: Vec<&str> = components
        .iter()
        .filter_map(|key| {
            let found = get_component(key);
            if found.is_none() {
                log::trace!("skipping unknown component '{}'", key);
            }
            found.map(|c| c.name)
        })
        .collect();
    let has = |key: &str| components.iter().any(|c| *c == key);

    let mut out = String::with_capacity(1536);
    write_inline_imports(&mut out, &names);
    write_component_open(&mut out, COMPONENT);

    line(&mut out, 1, "const [formData, setFormData] = useState({});");
    line(&mut out, 0, "");
    write_submit_handler(&mut out, "Form submitted:");
    line(&mut out, 0, "");
    write_change_handler(&mut out, false);
    line(&mut out, 0, "");

    line(&mut out, 1, "return (");
    line(&mut out, 2, "<Form onSubmit={handleSubmit} className=\"space-y-4\">");
    GENERIC_INPUT_FIELD.splice(&mut out, has("input") && has("label"));
    GENERIC_SUBMIT_BUTTON.splice(&mut out, has("button"));
    line(&mut out, 2, "</Form>");
    line(&mut out, 1, ");");

    write_component_close(&mut out, COMPONENT);
    out
}
