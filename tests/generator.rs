use component_suggester::generator::fragment::{
    FORGOT_PASSWORD_LINK, GENERIC_INPUT_FIELD, GENERIC_SUBMIT_BUTTON, REMEMBER_ME_FIELD,
    REMEMBER_ME_STATE,
};
use component_suggester::generator::{
    generate_generic_form, generate_login_form, generate_payment_form, generate_profile_card,
    generate_search_bar, generate_settings_panel, render_pattern,
};
use component_suggester::pattern::TemplateFlags;
use component_suggester::{Pattern, generate_code, suggest};
use pretty_assertions::assert_eq;

#[test]
fn login_with_both_fragments() {
    let description = "login form with remember me and forgot password";
    let code = generate_code(&suggest(description), description);
    assert!(code.contains("const LoginForm = () => {"));
    assert!(code.contains("    password: '',\n    rememberMe: false,\n  });"));
    assert!(code.contains(REMEMBER_ME_FIELD.text()));
    assert!(code.contains(FORGOT_PASSWORD_LINK.text()));
}

#[test]
fn login_without_fragments() {
    let code = generate_login_form(false, false);
    assert!(!code.contains("rememberMe"));
    assert!(!code.contains("/forgot-password"));
    assert!(code.contains("type=\"email\""));
    assert!(code.contains("type=\"password\""));
    assert!(code.contains("Sign In"));
}

#[test]
fn login_fragments_toggle_independently() {
    let bare = generate_login_form(false, false);

    let remember = generate_login_form(true, false)
        .replacen(REMEMBER_ME_STATE.text(), "", 1)
        .replacen(REMEMBER_ME_FIELD.text(), "", 1);
    assert_eq!(remember, bare);

    let forgot = generate_login_form(false, true).replacen(FORGOT_PASSWORD_LINK.text(), "", 1);
    assert_eq!(forgot, bare);
}

#[test]
fn login_ignores_payment_keyword() {
    let code = generate_code(&[], "login payment form");
    assert_eq!(code, generate_login_form(false, false));
}

#[test]
fn payment_embeds_validation_rules() {
    let code = generate_payment_form();
    assert!(code.contains(r"/^\d{16}$/"));
    assert!(code.contains(r"/^(0[1-9]|1[0-2])\/\d{2}$/"));
    assert!(code.contains(r"/^\d{3,4}$/"));
    for field in ["cardholderName", "cardNumber", "expiry", "cvv"] {
        assert!(code.contains(&format!("id=\"{}\"", field)), "missing {}", field);
    }
    assert!(code.contains("placeholder=\"MM/YY\""));
}

#[test]
fn profile_card_is_static() {
    let code = generate_profile_card();
    assert!(code.contains("<img"));
    assert!(code.contains("Edit Profile"));
    assert!(!code.contains("useState"));
    assert_eq!(generate_code(&[], "profile with avatar"), code);
}

#[test]
fn search_bar_filters_example_list() {
    let code = generate_search_bar();
    assert!(code.contains("const SUGGESTIONS = ['Dashboard', 'Documents',"));
    assert!(code.contains("item.toLowerCase().includes(query.trim().toLowerCase())"));
}

#[test]
fn settings_panel_has_two_toggles() {
    let code = generate_settings_panel();
    assert_eq!(code.matches("<Toggle").count(), 2);
    assert!(code.contains("emailNotifications: true,"));
    assert!(code.contains("darkMode: false,"));
}

#[test]
fn generic_includes_fragments_when_triggered() {
    let description = "some random text with button and input and label";
    let ranked = suggest(description);
    let code = generate_code(&ranked, description);
    assert!(code.contains("  Input Field, Button, Label\n} from '@visa/nova-react';"));
    assert!(code.contains(GENERIC_INPUT_FIELD.text()));
    assert!(code.contains(GENERIC_SUBMIT_BUTTON.text()));
}

#[test]
fn generic_input_needs_label() {
    let code = generate_generic_form(&["input", "button"]);
    assert!(!code.contains(GENERIC_INPUT_FIELD.text()));
    assert!(code.contains(GENERIC_SUBMIT_BUTTON.text()));

    let code = generate_generic_form(&["label", "input"]);
    assert!(code.contains(GENERIC_INPUT_FIELD.text()));
    assert!(!code.contains(GENERIC_SUBMIT_BUTTON.text()));
}

#[test]
fn generic_skips_unknown_components() {
    let code = generate_generic_form(&["input", "carousel", "label"]);
    assert!(code.contains("  Input Field, Label\n"));
    assert!(!code.contains("carousel"));
}

#[test]
fn empty_description_gives_minimal_generic_form() {
    let expected = r#"import React, { useState } from 'react';
import {
} from '@visa/nova-react';

const CustomForm = () => {
  const [formData, setFormData] = useState({});

  const handleSubmit = (e) => {
    e.preventDefault();
    console.log('Form submitted:', formData);
  };

  const handleChange = (e) => {
    const { name, value } = e.target;
    setFormData(prev => ({
      ...prev,
      [name]: value
    }));
  };

  return (
    <Form onSubmit={handleSubmit} className="space-y-4">
    </Form>
  );
};

export default CustomForm;
"#;
    assert_eq!(generate_code(&suggest(""), ""), expected);
}

#[test]
fn every_pattern_exports_its_component() {
    let flags = TemplateFlags {
        remember_me: true,
        forgot_password: true,
    };
    for pattern in Pattern::ALL {
        let code = render_pattern(pattern, flags, &["input", "label", "button"]);
        let export = format!("export default {};\n", pattern.component_name());
        assert!(code.ends_with(&export), "{} template has wrong export", pattern);
        assert!(code.contains("from '@visa/nova-react';"));
    }
}

#[test]
fn generation_is_deterministic() {
    for description in [
        "",
        "login form with remember me",
        "payment form",
        "profile card with avatar",
        "search with autocomplete",
        "settings panel",
        "contact form with email input and submit button",
    ] {
        let ranked = suggest(description);
        assert_eq!(
            generate_code(&ranked, description),
            generate_code(&ranked, description)
        );
    }
}
