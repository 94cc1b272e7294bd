//! Line-oriented writers shared by the pattern templates.
//!
//! Output uses 2-space indentation and `\n` line endings throughout.

/// Package every generated template imports its components from.
pub const NOVA_PACKAGE: &str = "@visa/nova-react";

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

/// Write one indented line. Empty text yields a bare newline without indentation.
pub(super) fn line(out: &mut String, level: usize, text: &str) {
    if !text.is_empty() {
        indent(out, level);
        out.push_str(text);
    }
    out.push('\n');
}

/// Write the `react` and Nova import block, one component per line.
pub(super) fn write_imports(out: &mut String, components: &[&str]) {
    out.push_str("import React, { useState } from 'react';\n");
    out.push_str("import {\n");
    for (i, name) in components.iter().enumerate() {
        indent(out, 1);
        out.push_str(name);
        if i + 1 < components.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&format!("}} from '{}';\n\n", NOVA_PACKAGE));
}

/// Write the Nova import block with all names on a single line.
pub(super) fn write_inline_imports(out: &mut String, names: &[&str]) {
    out.push_str("import React, { useState } from 'react';\n");
    out.push_str("import {\n");
    if !names.is_empty() {
        line(out, 1, &names.join(", "));
    }
    out.push_str(&format!("}} from '{}';\n\n", NOVA_PACKAGE));
}

pub(super) fn write_component_open(out: &mut String, component: &str) {
    out.push_str(&format!("const {} = () => {{\n", component));
}

pub(super) fn write_component_close(out: &mut String, component: &str) {
    out.push_str("};\n\n");
    out.push_str(&format!("export default {};\n", component));
}

/// `handleSubmit` that prevents the default action and logs the form data.
pub(super) fn write_submit_handler(out: &mut String, message: &str) {
    line(out, 1, "const handleSubmit = (e) => {");
    line(out, 2, "e.preventDefault();");
    line(out, 2, &format!("console.log('{}', formData);", message));
    line(out, 1, "};");
}

/// `handleChange` that stores the changed field. With `checkable`, checkbox and
/// toggle inputs store their `checked` state instead of `value`.
pub(super) fn write_change_handler(out: &mut String, checkable: bool) {
    line(out, 1, "const handleChange = (e) => {");
    if checkable {
        line(out, 2, "const { name, value, type, checked } = e.target;");
    } else {
        line(out, 2, "const { name, value } = e.target;");
    }
    line(out, 2, "setFormData(prev => ({");
    line(out, 3, "...prev,");
    if checkable {
        line(out, 3, "[name]: type === 'checkbox' ? checked : value");
    } else {
        line(out, 3, "[name]: value");
    }
    line(out, 2, "}));");
    line(out, 1, "};");
}

/// A labelled `<Input>` bound to `formData.<id>`.
pub(super) struct TextField<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub input_type: Option<&'a str>,
    /// Extra JSX attributes, written verbatim one per line.
    pub attrs: &'a [&'a str],
    /// Render `errors.<id>` below the input when set.
    pub show_error: bool,
}

pub(super) fn write_text_field(out: &mut String, level: usize, field: &TextField<'_>) {
    line(out, level, "<div>");
    line(
        out,
        level + 1,
        &format!("<Label htmlFor=\"{}\">{}</Label>", field.id, field.label),
    );
    line(out, level + 1, "<Input");
    line(out, level + 2, &format!("id=\"{}\"", field.id));
    line(out, level + 2, &format!("name=\"{}\"", field.id));
    if let Some(t) = field.input_type {
        line(out, level + 2, &format!("type=\"{}\"", t));
    }
    for attr in field.attrs {
        line(out, level + 2, attr);
    }
    line(out, level + 2, &format!("value={{formData.{}}}", field.id));
    line(out, level + 2, "onChange={handleChange}");
    line(out, level + 2, "required");
    line(out, level + 1, "/>");
    if field.show_error {
        line(
            out,
            level + 1,
            &format!(
                "{{errors.{id} && <p className=\"text-sm text-red-600\">{{errors.{id}}}</p>}}",
                id = field.id
            ),
        );
    }
    line(out, level, "</div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_are_comma_separated_without_trailing_comma() {
        let mut out = String::new();
        write_imports(&mut out, &["Form", "Button"]);
        assert!(out.contains("  Form,\n  Button\n} from '@visa/nova-react';"));
    }

    #[test]
    fn inline_imports_skip_empty_list() {
        let mut out = String::new();
        write_inline_imports(&mut out, &[]);
        assert!(out.contains("import {\n} from '@visa/nova-react';"));
    }

    #[test]
    fn text_field_binds_value_and_error() {
        let mut out = String::new();
        let field = TextField {
            id: "cvv",
            label: "CVV",
            input_type: Some("password"),
            attrs: &["maxLength={4}"],
            show_error: true,
        };
        write_text_field(&mut out, 0, &field);
        assert!(out.starts_with("<div>\n  <Label htmlFor=\"cvv\">CVV</Label>\n"));
        assert!(out.contains("    type=\"password\"\n    maxLength={4}\n"));
        assert!(out.contains("value={formData.cvv}"));
        assert!(out.contains("{errors.cvv && "));
        assert!(out.ends_with("</div>\n"));
    }
}
