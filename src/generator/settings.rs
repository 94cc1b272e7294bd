use super::jsx::{
    line, write_change_handler, write_component_close, write_component_open, write_imports,
    write_submit_handler,
};
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Settings.component_name();

const IMPORTS: &[&str] = &["Form", "Toggle", "Label", "Button", "Card", "Heading"];

/// Boolean settings rendered as toggles: (state key, label, initial value).
const TOGGLES: &[(&str, &str, bool)] = &[
    ("emailNotifications", "Email notifications", true),
    ("darkMode", "Dark mode", false),
];

fn write_toggle(out: &mut String, level: usize, key: &str, label: &str) {
    line(out, level, "<div className=\"flex items-center justify-between\">");
    line(out, level + 1, &format!("<Label htmlFor=\"{}\">{}</Label>", key, label));
    line(out, level + 1, "<Toggle");
    line(out, level + 2, &format!("id=\"{}\"", key));
    line(out, level + 2, &format!("name=\"{}\"", key));
    line(out, level + 2, "type=\"checkbox\"");
    line(out, level + 2, &format!("checked={{formData.{}}}", key));
    line(out, level + 2, "onChange={handleChange}");
    line(out, level + 1, "/>");
    line(out, level, "</div>");
}

/// Settings panel with two toggle fields and a save button.
pub fn generate_settings_panel() -> String {
    let mut out = String::with_capacity(2048);
    write_imports(&mut out, IMPORTS);
    write_component_open(&mut out, COMPONENT);

    line(&mut out, 1, "const [formData, setFormData] = useState({");
    for (key, _, initial) in TOGGLES {
        line(&mut out, 2, &format!("{}: {},", key, initial));
    }
    line(&mut out, 1, "});");
    line(&mut out, 0, "");
    write_submit_handler(&mut out, "Settings saved:");
    line(&mut out, 0, "");
    write_change_handler(&mut out, true);
    line(&mut out, 0, "");

    line(&mut out, 1, "return (");
    line(&mut out, 2, "<Card className=\"max-w-md mx-auto p-6\">");
    line(&mut out, 3, "<Heading level={2} className=\"mb-4\">Settings</Heading>");
    line(&mut out, 3, "<Form onSubmit={handleSubmit} className=\"space-y-4\">");
    for (key, label, _) in TOGGLES {
        write_toggle(&mut out, 4, key, label);
    }
    line(&mut out, 0, "");
    line(&mut out, 4, "<Button type=\"submit\" variant=\"primary\">");
    line(&mut out, 5, "Save Settings");
    line(&mut out, 4, "</Button>");
    line(&mut out, 3, "</Form>");
    line(&mut out, 2, "</Card>");
    line(&mut out, 1, ");");

    write_component_close(&mut out, COMPONENT);
    out
}
