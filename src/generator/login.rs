use super::fragment::{FORGOT_PASSWORD_LINK, REMEMBER_ME_FIELD, REMEMBER_ME_STATE};
use super::jsx::{
    TextField, line, write_change_handler, write_component_close, write_component_open,
    write_imports, write_submit_handler, write_text_field,
};
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Login.component_name();

const IMPORTS: &[&str] = &["Form", "Input", "Label", "Button", "Checkbox", "Link", "Card"];

const EMAIL: TextField<'static> = TextField {
    id: "email",
    label: "Email Address",
    input_type: Some("email"),
    attrs: &[],
    show_error: false,
};

const PASSWORD: TextField<'static> = TextField {
    id: "password",
    label: "Password",
    input_type: Some("password"),
    attrs: &[],
    show_error: false,
};

/// Login form with email and password, plus the optional remember-me
/// checkbox and forgot-password link.
pub fn generate_login_form(has_remember_me: bool, has_forgot_password: bool) -> String {
    let mut out = String::with_capacity(2048);
    write_imports(&mut out, IMPORTS);
    write_component_open(&mut out, COMPONENT);

    line(&mut out, 1, "const [formData, setFormData] = useState({");
    line(&mut out, 2, "email: '',");
    line(&mut out, 2, "password: '',");
    REMEMBER_ME_STATE.splice(&mut out, has_remember_me);
    line(&mut out, 1, "});");
    line(&mut out, 0, "");

    line(&mut out, 1, "// Handle form submission");
    write_submit_handler(&mut out, "Form submitted:");
    line(&mut out, 0, "");
    line(&mut out, 1, "// Handle input changes");
    write_change_handler(&mut out, true);
    line(&mut out, 0, "");

    line(&mut out, 1, "return (");
    line(&mut out, 2, "<Card className=\"max-w-md mx-auto p-6\">");
    line(&mut out, 3, "<Form onSubmit={handleSubmit} className=\"space-y-4\">");
    write_text_field(&mut out, 4, &EMAIL);
    line(&mut out, 0, "");
    write_text_field(&mut out, 4, &PASSWORD);
    REMEMBER_ME_FIELD.splice(&mut out, has_remember_me);
    line(&mut out, 0, "");
    line(&mut out, 4, "<Button");
    line(&mut out, 5, "type=\"submit\"");
    line(&mut out, 5, "variant=\"primary\"");
    line(&mut out, 5, "className=\"w-full\"");
    line(&mut out, 4, ">");
    line(&mut out, 5, "Sign In");
    line(&mut out, 4, "</Button>");
    FORGOT_PASSWORD_LINK.splice(&mut out, has_forgot_password);
    line(&mut out, 3, "</Form>");
    line(&mut out, 2, "</Card>");
    line(&mut out, 1, ");");

    write_component_close(&mut out, COMPONENT);
    out
}
