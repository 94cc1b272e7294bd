//! Named optional fragments spliced into templates.
//!
//! A fragment is either emitted in full or not at all. Each one is a run of
//! complete lines carrying its own indentation and trailing newline, so
//! toggling one never changes the text around it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub name: &'static str,
    text: &'static str,
}

impl Fragment {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// The full fragment text when enabled, otherwise the empty string.
    pub fn when(&self, enabled: bool) -> &'static str {
        if enabled { self.text } else { "" }
    }

    pub fn splice(&self, out: &mut String, enabled: bool) {
        out.push_str(self.when(enabled));
    }
}

/// `rememberMe` entry in the login form's initial state.
pub const REMEMBER_ME_STATE: Fragment = Fragment::new(
    "remember-me-state",
    "    rememberMe: false,\n",
);

/// Remember-me checkbox row in the login form.
pub const REMEMBER_ME_FIELD: Fragment = Fragment::new(
    "remember-me-field",
    r#"
        <div className="flex items-center">
          <Checkbox
            id="rememberMe"
            name="rememberMe"
            checked={formData.rememberMe}
            onChange={handleChange}
          />
          <Label htmlFor="rememberMe" className="ml-2">
            Remember me
          </Label>
        </div>
"#,
);

/// Forgot-password link below the login button.
pub const FORGOT_PASSWORD_LINK: Fragment = Fragment::new(
    "forgot-password-link",
    r#"
        <div className="text-center">
          <Link href="/forgot-password">
            Forgot your password?
          </Link>
        </div>
"#,
);

/// Labelled input in the generic form; needs both `input` and `label`.
pub const GENERIC_INPUT_FIELD: Fragment = Fragment::new(
    "generic-input-field",
    r#"      <div>
        <Label htmlFor="input-field">Input Field</Label>
        <Input
          id="input-field"
          name="inputField"
          onChange={handleChange}
          required
        />
      </div>
"#,
);

/// Submit button in the generic form; needs `button`.
pub const GENERIC_SUBMIT_BUTTON: Fragment = Fragment::new(
    "generic-submit-button",
    r#"      <Button type="submit" variant="primary">
        Submit
      </Button>
"#,
);
