use component_suggester::pattern::{PATTERN_RULES, TemplateFlags, classify};
use component_suggester::report::EXAMPLE_DESCRIPTIONS;
use component_suggester::{Error, Pattern};

#[test]
fn login_wins_over_later_rules() {
    assert_eq!(classify("login payment form").pattern, Pattern::Login);
    assert_eq!(classify("login settings with toggle").pattern, Pattern::Login);
}

#[test]
fn login_flags_follow_description() {
    let c = classify("login form with remember me and forgot password");
    assert_eq!(c.pattern, Pattern::Login);
    assert_eq!(
        c.flags,
        TemplateFlags {
            remember_me: true,
            forgot_password: true
        }
    );
    assert_eq!(classify("Login").flags, TemplateFlags::default());
}

#[test]
fn profile_needs_avatar() {
    assert_eq!(classify("profile card with avatar").pattern, Pattern::Profile);
    assert_eq!(classify("user profile page").pattern, Pattern::Generic);
    assert_eq!(classify("profile settings").pattern, Pattern::Settings);
}

#[test]
fn search_needs_autocomplete() {
    assert_eq!(classify("search with autocomplete").pattern, Pattern::Search);
    assert_eq!(classify("search bar").pattern, Pattern::Generic);
}

#[test]
fn settings_matches_either_keyword() {
    assert_eq!(classify("settings page").pattern, Pattern::Settings);
    assert_eq!(classify("dark mode toggle").pattern, Pattern::Settings);
}

#[test]
fn payment_precedes_profile() {
    assert_eq!(
        classify("payment profile with avatar").pattern,
        Pattern::Payment
    );
}

#[test]
fn empty_description_is_generic() {
    let c = classify("");
    assert_eq!(c.pattern, Pattern::Generic);
    assert_eq!(c.flags, TemplateFlags::default());
}

#[test]
fn rule_table_order() {
    let order: Vec<Pattern> = PATTERN_RULES.iter().map(|r| r.pattern).collect();
    assert_eq!(
        order,
        [
            Pattern::Login,
            Pattern::Payment,
            Pattern::Profile,
            Pattern::Search,
            Pattern::Settings
        ]
    );
}

#[test]
fn example_descriptions_cover_each_named_pattern() {
    let patterns: Vec<Pattern> = EXAMPLE_DESCRIPTIONS
        .iter()
        .map(|d| classify(d).pattern)
        .collect();
    assert_eq!(
        patterns,
        [
            Pattern::Login,
            Pattern::Profile,
            Pattern::Payment,
            Pattern::Search,
            Pattern::Settings
        ]
    );
}

#[test]
fn pattern_names_parse() {
    for p in Pattern::ALL {
        assert_eq!(p.to_string().parse::<Pattern>(), Ok(p));
    }
    assert_eq!(" Payment ".parse::<Pattern>(), Ok(Pattern::Payment));
    assert_eq!(
        "wizard".parse::<Pattern>(),
        Err(Error::UnknownPattern("wizard".to_string()))
    );
}
