use super::jsx::{
    TextField, line, write_change_handler, write_component_close, write_component_open,
    write_imports, write_text_field,
};
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Payment.component_name();

const IMPORTS: &[&str] = &["Form", "Input", "Label", "Button", "Card"];

/// Validation rules baked into the template: (field, regex, message).
/// The regexes are JavaScript literals and are never evaluated here.
const RULES: &[(&str, &str, &str)] = &[
    ("cardNumber", r"/^\d{16}$/", "Card number must be 16 digits"),
    ("expiry", r"/^(0[1-9]|1[0-2])\/\d{2}$/", "Expiry date must be in MM/YY format"),
    ("cvv", r"/^\d{3,4}$/", "Security code must be 3 or 4 digits"),
];

const CARDHOLDER: TextField<'static> = TextField {
    id: "cardholderName",
    label: "Cardholder Name",
    input_type: None,
    attrs: &["autoComplete=\"cc-name\""],
    show_error: true,
};

const CARD_NUMBER: TextField<'static> = TextField {
    id: "cardNumber",
    label: "Card Number",
    input_type: None,
    attrs: &[
        "inputMode=\"numeric\"",
        "autoComplete=\"cc-number\"",
        "placeholder=\"1234 5678 9012 3456\"",
        "maxLength={19}",
    ],
    show_error: true,
};

const EXPIRY: TextField<'static> = TextField {
    id: "expiry",
    label: "Expiry Date",
    input_type: None,
    attrs: &["autoComplete=\"cc-exp\"", "placeholder=\"MM/YY\"", "maxLength={5}"],
    show_error: true,
};

const CVV: TextField<'static> = TextField {
    id: "cvv",
    label: "CVV",
    input_type: Some("password"),
    attrs: &["inputMode=\"numeric\"", "autoComplete=\"cc-csc\"", "maxLength={4}"],
    show_error: true,
};

fn write_validators(out: &mut String) {
    line(out, 0, "const validators = {");
    for (field, regex, _) in RULES {
        // Card digits may be entered in space-separated groups.
        let value = if *field == "cardNumber" {
            "value.replace(/\\s/g, '')"
        } else {
            "value"
        };
        line(out, 1, &format!("{}: (value) => {}.test({}),", field, regex, value));
    }
    line(out, 0, "};");
    line(out, 0, "");
    line(out, 0, "const errorMessages = {");
    for (field, _, message) in RULES {
        line(out, 1, &format!("{}: '{}',", field, message));
    }
    line(out, 0, "};");
    line(out, 0, "");
}

fn write_validate(out: &mut String) {
    line(out, 1, "const validate = () => {");
    line(out, 2, "const nextErrors = {};");
    line(out, 2, "if (!formData.cardholderName.trim()) {");
    line(out, 3, "nextErrors.cardholderName = 'Cardholder name is required';");
    line(out, 2, "}");
    line(out, 2, "Object.entries(validators).forEach(([field, isValid]) => {");
    line(out, 3, "if (!isValid(formData[field])) {");
    line(out, 4, "nextErrors[field] = errorMessages[field];");
    line(out, 3, "}");
    line(out, 2, "});");
    line(out, 2, "setErrors(nextErrors);");
    line(out, 2, "return Object.keys(nextErrors).length === 0;");
    line(out, 1, "};");
}

/// Payment form with cardholder, card number, expiry and security code fields.
/// Validation runs client-side inside the generated component.
pub fn generate_payment_form() -> String {
    let mut out = String::with_capacity(3072);
    write_imports(&mut out, IMPORTS);
    write_validators(&mut out);
    write_component_open(&mut out, COMPONENT);

    line(&mut out, 1, "const [formData, setFormData] = useState({");
    line(&mut out, 2, "cardholderName: '',");
    for (field, _, _) in RULES {
        line(&mut out, 2, &format!("{}: '',", field));
    }
    line(&mut out, 1, "});");
    line(&mut out, 1, "const [errors, setErrors] = useState({});");
    line(&mut out, 0, "");

    write_validate(&mut out);
    line(&mut out, 0, "");
    line(&mut out, 1, "const handleSubmit = (e) => {");
    line(&mut out, 2, "e.preventDefault();");
    line(&mut out, 2, "if (validate()) {");
    line(&mut out, 3, "console.log('Payment submitted:', formData);");
    line(&mut out, 2, "}");
    line(&mut out, 1, "};");
    line(&mut out, 0, "");
    write_change_handler(&mut out, false);
    line(&mut out, 0, "");

    line(&mut out, 1, "return (");
    line(&mut out, 2, "<Card className=\"max-w-md mx-auto p-6\">");
    line(&mut out, 3, "<Form onSubmit={handleSubmit} className=\"space-y-4\" noValidate>");
    write_text_field(&mut out, 4, &CARDHOLDER);
    line(&mut out, 0, "");
    write_text_field(&mut out, 4, &CARD_NUMBER);
    line(&mut out, 0, "");
    line(&mut out, 4, "<div className=\"grid grid-cols-2 gap-4\">");
    write_text_field(&mut out, 5, &EXPIRY);
    write_text_field(&mut out, 5, &CVV);
    line(&mut out, 4, "</div>");
    line(&mut out, 0, "");
    line(&mut out, 4, "<Button type=\"submit\" variant=\"primary\" className=\"w-full\">");
    line(&mut out, 5, "Pay Now");
    line(&mut out, 4, "</Button>");
    line(&mut out, 3, "</Form>");
    line(&mut out, 2, "</Card>");
    line(&mut out, 1, ");");

    write_component_close(&mut out, COMPONENT);
    out
}
